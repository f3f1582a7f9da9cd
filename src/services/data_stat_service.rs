//! # سرویس آمار داده
//!
//! collaborator واقعی که آمار رو از جدول شمارنده‌ها میخونه.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::{database::StatRepository, error::Result, models::StatsResult};

use super::StatService;

/// سرویس آمار مبتنی بر SQLite
///
/// خروجی `stat()` یه object از نام شمارنده به مقدارش هست:
/// ```json
/// { "users": 3, "visits": 42 }
/// ```
#[derive(Debug, Clone)]
pub struct DataStatService {
    repo: StatRepository,
}

impl DataStatService {
    #[must_use]
    pub fn new(repo: StatRepository) -> Self {
        Self { repo }
    }

    /// دسترسی به repository برای ثبت شمارنده‌ها
    #[must_use]
    pub fn repository(&self) -> &StatRepository {
        &self.repo
    }
}

#[async_trait]
impl StatService for DataStatService {
    #[instrument(skip(self))]
    async fn stat(&self) -> Result<StatsResult> {
        let counters = self.repo.all().await?;

        let data: Map<String, Value> = counters
            .into_iter()
            .map(|counter| (counter.name, Value::from(counter.value)))
            .collect();

        Ok(Value::Object(data))
    }
}
