//! # کدهای خطای Envelope
//!
//! کدهای عددی که در فیلد `error_code` پاسخ‌ها قرار میگیرن.
//! هم adapter‌ها و هم تست‌ها از همین ثابت‌ها استفاده میکنن.

use std::fmt;

use serde::{Deserialize, Serialize};

/// کد خطای envelope
///
/// # مفاهیم:
/// - Newtype Pattern: یه `i32` ساده با نوع مشخص
/// - `#[serde(transparent)]`: در JSON فقط عدد نمایش داده میشه
///
/// # مثال
/// ```rust
/// use data_stat_page::error::ErrorCode;
///
/// assert_eq!(ErrorCode::SUCCESS.as_i32(), 0);
/// assert!(ErrorCode::SUCCESS.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// عملیات موفق
    pub const SUCCESS: Self = Self(0);

    /// پارامتر ورودی نامعتبر
    pub const INVALID_PARAM: Self = Self(1001);

    /// action یا منبع پیدا نشد
    pub const NOT_FOUND: Self = Self(1002);

    /// خطای داخلی
    pub const INTERNAL: Self = Self(2001);

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
