//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Error Propagation**: انتشار خطا با `?`
//!
//! ## سیاست انتشار خطا
//!
//! page‌ها خطای collaborator رو نمیگیرن و تغییر نمیدن؛ خطا با `?` بالا میره
//! و فقط همینجا، در `IntoResponse`، به پاسخ HTTP تبدیل میشه.

mod code;

pub use code::ErrorCode;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// به جای نوشتن `Result<Value, AppError>` میتونیم بنویسیم `Result<Value>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[error("...")]`: پیام خطا برای هر نوع
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// پیدا نشد - 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// خطای اعتبارسنجی - 422
    #[error("Validation error: {0}")]
    Validation(String),

    /// بدنه درخواست بزرگتر از حد مجاز - 413
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای دیتابیس
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// خطای migration
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// خطای JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,

            // 5xx Server Errors
            Self::Internal(_)
            | Self::Config(_)
            | Self::Database(_)
            | Self::Migration(_)
            | Self::Io(_)
            | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// کد envelope متناسب با خطا
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) | Self::PayloadTooLarge(_) => {
                ErrorCode::INVALID_PARAM
            }
            Self::NotFound(_) => ErrorCode::NOT_FOUND,
            _ => ErrorCode::INTERNAL,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// خطای crate `config` (لود فایل تنظیمات) به AppError::Config تبدیل میشه
impl From<::config::ConfigError> for AppError {
    fn from(err: ::config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
///
/// `error_code` همون فیلد envelope موفق هست تا کلاینت با یه کلید
/// هر دو حالت رو تشخیص بده.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// کد envelope
    pub error_code: ErrorCode,

    /// نام وضعیت HTTP (مثلا "Not Found")
    pub error: String,

    /// پیام خطا
    pub message: String,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(
        error_code: ErrorCode,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error_code,
            error: error.into(),
            message: message.into(),
        }
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// این تنها جایی هست که خطای منتشر شده از page‌ها لاگ میشه.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let status = self.status_code();

        let error_response = ErrorResponse::new(
            self.error_code(),
            status.canonical_reason().unwrap_or("Error"),
            self.to_string(),
        );

        (status, Json(error_response)).into_response()
    }
}

// =====================================
// Result Extensions
// =====================================
/// Extension trait برای Result
///
/// # مفاهیم:
/// - Extension Trait: اضافه کردن متد به نوع‌های موجود
pub trait ResultExt<T, E> {
    /// تبدیل خطا به AppError::Internal
    fn map_internal(self) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for std::result::Result<T, E> {
    fn map_internal(self) -> Result<T> {
        self.map_err(|e| AppError::Internal(e.to_string()))
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
pub trait OptionExt<T> {
    /// تبدیل None به AppError::NotFound
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AppError::NotFound(message.into()))
    }
}
