//! # Stat Page
//!
//! adapter بین envelope عمومی و سرویس آمار.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{PageRequest, PageResponse, StatsResult},
    services::StatService,
};

use super::Page;

/// نام action page آمار در registry
pub const STAT_ACTION: &str = "stat";

/// page آمار داده
///
/// # مفاهیم:
/// - Generic: هر نوعی که `StatService` رو پیاده کنه
/// - Ownership: page مالک انحصاری collaborator هست
///
/// # مثال
/// ```rust,ignore
/// let page = StatPage::new(DataStatService::new(repo));
/// let response = page.execute(PageRequest::new()).await?;
/// assert!(response.is_success());
/// ```
#[derive(Debug)]
pub struct StatPage<S> {
    service: S,
}

impl<S: StatService> StatPage<S> {
    #[must_use]
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<S: StatService> Page for StatPage<S> {
    /// پارامترهای request خونده نمیشن. خطای `stat()` دست نخورده برمیگرده.
    async fn execute(&self, _request: PageRequest) -> Result<PageResponse<StatsResult>> {
        let data = self.service.stat().await?;
        Ok(PageResponse::success(data))
    }
}
