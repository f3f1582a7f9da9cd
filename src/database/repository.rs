//! # Repository شمارنده‌های آمار
//!
//! دسترسی به جدول `stat_counters`.
//!
//! ## مفاهیم Rust:
//! - **FromRow**: تبدیل ردیف دیتابیس به struct
//! - **Dependency Injection**: Database به repository تزریق میشه

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::debug;

use super::Database;
use crate::error::{AppError, Result};

/// یک شمارنده آمار
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StatCounter {
    pub name: String,
    pub value: i64,
}

/// Repository برای شمارنده‌های آمار
#[derive(Debug, Clone)]
pub struct StatRepository {
    db: Database,
}

impl StatRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// همه شمارنده‌ها، مرتب بر اساس نام
    pub async fn all(&self) -> Result<Vec<StatCounter>> {
        let counters = sqlx::query_as::<_, StatCounter>(
            "SELECT name, value FROM stat_counters ORDER BY name",
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(counters)
    }

    /// پیدا کردن یک شمارنده
    pub async fn find(&self, name: &str) -> Result<Option<StatCounter>> {
        let counter = sqlx::query_as::<_, StatCounter>(
            "SELECT name, value FROM stat_counters WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(counter)
    }

    /// تنظیم مقدار شمارنده (upsert)
    pub async fn set(&self, name: &str, value: i64) -> Result<()> {
        validate_name(name)?;

        sqlx::query(
            r#"
            INSERT INTO stat_counters (name, value) VALUES (?, ?)
            ON CONFLICT(name) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(name)
        .bind(value)
        .execute(self.db.pool())
        .await?;

        debug!(name, value, "Counter set");
        Ok(())
    }

    /// افزایش شمارنده؛ اگه وجود نداشته باشه با `by` ساخته میشه
    ///
    /// مقدار جدید رو برمیگردونه. خواندن و نوشتن در یک تراکنش انجام میشه
    /// تا سرریز `i64` قبل از نوشتن رد بشه؛ SQLite در صورت سرریز مقدار رو
    /// بی‌صدا به REAL تبدیل میکنه و ردیف دیگه قابل خواندن نیست.
    ///
    /// # Errors
    /// `Validation` اگه نتیجه از بازه `i64` خارج بشه
    pub async fn increment(&self, name: &str, by: i64) -> Result<i64> {
        validate_name(name)?;

        let mut tx = self.db.pool().begin().await?;

        let current: Option<i64> =
            sqlx::query_scalar("SELECT value FROM stat_counters WHERE name = ?")
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;

        // در صورت خطا tx بدون commit drop میشه و rollback انجام میشه
        let value = current.unwrap_or(0).checked_add(by).ok_or_else(|| {
            AppError::Validation(format!("Counter '{}' would overflow", name))
        })?;

        sqlx::query(
            r#"
            INSERT INTO stat_counters (name, value) VALUES (?, ?)
            ON CONFLICT(name) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(name)
        .bind(value)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(value)
    }

    /// تعداد شمارنده‌ها
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stat_counters")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Counter name cannot be empty".to_string()));
    }
    Ok(())
}
