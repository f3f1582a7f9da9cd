//! # ماژول سرویس‌ها (Collaborator Layer)
//!
//! سرویس‌هایی که page‌ها بهشون کار رو واگذار میکنن.
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │   Page Layer    │  <-- adapter‌ها: request -> envelope
//! ├─────────────────┤
//! │  Service Layer  │  <-- collaborator‌ها (اینجا!)
//! ├─────────────────┤
//! │ Repository Layer│  <-- Data access
//! └─────────────────┘
//! ```
//!
//! ## مفاهیم Rust:
//! - **Traits برای Abstraction**: page فقط trait رو میشناسه
//! - **Arc<T>**: اشتراک امن بین threads

mod data_stat_service;

pub use data_stat_service::*;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    config::Config,
    database::{Database, StatRepository},
    error::Result,
    models::StatsResult,
    pages::{PageRegistry, StatPage, STAT_ACTION},
};

// =====================================
// Stat Service Trait
// =====================================
/// قابلیت گرفتن آمار
///
/// # مفاهیم:
/// - `#[async_trait]`: async در traits
/// - `automock`: در تست‌ها `MockStatService` ساخته میشه
///
/// هیچ آرگومانی نمیگیره؛ هر خطایی که برگردونه بدون تغییر به caller میرسه.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatService: Send + Sync {
    /// گرفتن آمار فعلی
    async fn stat(&self) -> Result<StatsResult>;
}

#[async_trait]
impl<T: StatService + ?Sized> StatService for Arc<T> {
    async fn stat(&self) -> Result<StatsResult> {
        (**self).stat().await
    }
}

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// clone کردنش فقط Arc‌ها رو clone میکنه
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// اتصال دیتابیس برای health check
    pub database: Database,

    /// dispatcher action‌ها
    pub pages: Arc<PageRegistry>,

    /// زمان شروع برای uptime
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// ساخت AppState با registry دلخواه
    ///
    /// تست‌ها از این برای تزریق page‌های stub استفاده میکنن
    #[must_use]
    pub fn new(db: Database, config: Config, pages: PageRegistry) -> Self {
        Self {
            config: Arc::new(config),
            database: db,
            pages: Arc::new(pages),
            started_at: Utc::now(),
        }
    }

    /// ساخت AppState با page‌های پیش‌فرض سرویس
    ///
    /// # مفاهیم:
    /// - Factory method
    /// - Dependency Injection: collaborator به page تزریق میشه
    #[must_use]
    pub fn with_default_pages(db: Database, config: Config) -> Self {
        let stat_service = DataStatService::new(StatRepository::new(db.clone()));

        let mut pages = PageRegistry::new();
        pages.register(STAT_ACTION, StatPage::new(stat_service));

        Self::new(db, config, pages)
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// ثانیه‌های گذشته از شروع
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        let elapsed = Utc::now().signed_duration_since(self.started_at);
        u64::try_from(elapsed.num_seconds()).unwrap_or(0)
    }
}
