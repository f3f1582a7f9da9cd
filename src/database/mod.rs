//! # ماژول دیتابیس (Database Layer)
//!
//! ذخیره‌سازی شمارنده‌های آمار در SQLite.
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: جداسازی لایه داده از منطق
//! - Connection Pool: مدیریت اتصالات دیتابیس

mod repository;

pub use repository::*;

use std::sync::Arc;
use std::time::Duration;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqlitePool, SqlitePoolOptions},
};

use crate::error::Result;

// مسیر migration‌ها
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

// =====================================
// Database Connection
// =====================================
/// اتصال به دیتابیس با Connection Pool
///
/// # مفاهیم:
/// - `Arc<SqlitePool>`: هر clone فقط counter رو زیاد میکنه
#[derive(Debug, Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// اتصال به دیتابیس
    ///
    /// # Arguments
    /// * `database_url` - آدرس دیتابیس (مثلا `sqlite://data/stats.db?mode=rwc`)
    ///
    /// # Errors
    /// خطا برمیگردونه اگه پوشه دیتابیس ساخته نشه یا اتصال موفق نباشه
    pub async fn connect(database_url: impl AsRef<str>) -> Result<Self> {
        let url = database_url.as_ref();

        // ساخت پوشه فایل دیتابیس اگه وجود نداره
        if let Some(path) = url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqlitePoolOptions::new()
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5));

        // هر اتصال in-memory دیتابیس جدای خودش رو داره؛
        // پس فقط یک اتصال که هیچوقت بسته نمیشه
        let options = if url.contains(":memory:") {
            options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options
                .max_connections(10)
                .idle_timeout(Duration::from_secs(600))
        };

        let pool = options.connect(url).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// ساخت دیتابیس in-memory با migration‌های اجرا شده
    ///
    /// برای تست‌ها و اجرای محلی بدون فایل
    pub async fn in_memory() -> Result<Self> {
        let db = Self::connect("sqlite::memory:").await?;
        db.migrate().await?;
        Ok(db)
    }

    /// اجرای migration‌ها
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&*self.pool).await?;
        Ok(())
    }

    /// دسترسی به pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// بررسی سلامت دیتابیس
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_health_check() {
        let db = Database::in_memory().await.unwrap();
        assert!(db.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_creates_missing_parent_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("nested").join("stats.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let db = Database::connect(&url).await.unwrap();
        db.migrate().await.unwrap();

        assert!(db_path.parent().unwrap().is_dir());
        assert!(db.health_check().await.is_ok());
    }
}
