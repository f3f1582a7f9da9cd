//! # لایه Page (Adapter Layer)
//!
//! هر page یک request عمومی میگیره، کار رو به یک collaborator واگذار میکنه
//! و نتیجه رو در envelope ثابت `{error_code, result}` برمیگردونه.
//!
//! ## مفاهیم Rust:
//! - **Trait Objects**: `Arc<dyn Page>` برای نگهداری page‌های مختلف
//! - **HashMap**: نگاشت نام action به page

mod stat_page;

pub use stat_page::*;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::{
    error::{OptionExt, Result},
    models::{PageRequest, PageResponse, StatsResult},
};

// =====================================
// Page Trait
// =====================================
/// رابط مشترک همه page‌ها
#[async_trait]
pub trait Page: Send + Sync {
    /// اجرای page برای یک request
    async fn execute(&self, request: PageRequest) -> Result<PageResponse<StatsResult>>;
}

// =====================================
// Page Registry
// =====================================
/// dispatcher: نام action -> page
///
/// # مثال
/// ```rust,ignore
/// let mut pages = PageRegistry::new();
/// pages.register(STAT_ACTION, StatPage::new(service));
/// let response = pages.dispatch("stat", PageRequest::new()).await?;
/// ```
#[derive(Default)]
pub struct PageRegistry {
    pages: HashMap<String, Arc<dyn Page>>,
}

impl PageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ثبت یک page
    ///
    /// اگه action قبلا ثبت شده باشه، page قبلی جایگزین و برگردونده میشه
    pub fn register<P>(&mut self, action: impl Into<String>, page: P) -> Option<Arc<dyn Page>>
    where
        P: Page + 'static,
    {
        self.pages.insert(action.into(), Arc::new(page))
    }

    /// آیا action ثبت شده؟
    #[must_use]
    pub fn contains(&self, action: &str) -> bool {
        self.pages.contains_key(action)
    }

    /// نام action‌های ثبت شده، مرتب
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        let mut actions: Vec<String> = self.pages.keys().cloned().collect();
        actions.sort();
        actions
    }

    /// اجرای page متناظر با action
    ///
    /// # Errors
    /// - `NotFound`: action ثبت نشده
    /// - هر خطایی که خود page برگردونه، بدون تغییر
    #[instrument(skip(self, request), fields(params = request.len()))]
    pub async fn dispatch(
        &self,
        action: &str,
        request: PageRequest,
    ) -> Result<PageResponse<StatsResult>> {
        let page = self
            .pages
            .get(action)
            .ok_or_not_found(format!("Unknown action '{}'", action))
            .inspect_err(|_| warn!(action, "Dispatch to unknown action"))?;

        debug!(action, "Dispatching page");
        page.execute(request).await
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("actions", &self.actions())
            .finish()
    }
}
