//! # Data Stat Page Library
//!
//! لایه page-service: هر action به یک page (adapter) میرسه، page کار رو به
//! یک collaborator واگذار میکنه و نتیجه رو در envelope ثابت برمیگردونه.
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه - اینجا!
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها و کدهای envelope
//! ├── database/       # لایه دیتابیس (شمارنده‌های آمار)
//! ├── models/         # PageRequest / PageResponse
//! ├── services/       # collaborator‌ها و AppState
//! ├── pages/          # adapter‌ها و dispatcher
//! └── api/            # لایه HTTP
//! ```
//!
//! ## مثال استفاده
//!
//! ```rust,no_run
//! use data_stat_page::{config::Config, database::Database, services::AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let db = Database::connect(&config.database_url).await.unwrap();
//!     let state = AppState::with_default_pages(db, config);
//! }
//! ```

// =====================================
// Module Declarations
// =====================================

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول ارتباط با دیتابیس
pub mod database;

/// ماژول مدل‌های داده
pub mod models;

/// ماژول collaborator‌ها
pub mod services;

/// ماژول page‌ها
pub mod pages;

/// ماژول API و HTTP Handlers
pub mod api;

// =====================================
// Re-exports
// =====================================

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

/// کد envelope
pub use error::ErrorCode;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// ```rust
/// use data_stat_page::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::database::Database;
    pub use crate::error::{AppError, ErrorCode, Result};
    pub use crate::models::*;
    pub use crate::pages::*;
    pub use crate::services::*;
}
