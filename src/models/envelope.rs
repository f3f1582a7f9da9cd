//! # Request / Response Envelope
//!
//! قالب یکسان ورودی و خروجی همه page‌ها.
//!
//! ```json
//! {
//!   "error_code": 0,
//!   "result": { "data": ... }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, ErrorCode, Result};

/// نتیجه‌ای که collaborator آمار برمیگردونه
///
/// این لایه شکل داخلیش رو تفسیر نمیکنه.
pub type StatsResult = Value;

// =====================================
// Page Request
// =====================================
/// پارامترهای ورودی یک page
///
/// # مفاهیم:
/// - Newtype Pattern دور `serde_json::Map`
/// - `null` یا نبودن بدنه معادل mapping خالی هست
///
/// # مثال
/// ```rust
/// use data_stat_page::models::PageRequest;
/// use serde_json::json;
///
/// let request = PageRequest::from_value(json!({ "from": "2024-01-01" })).unwrap();
/// assert_eq!(request.len(), 1);
///
/// let empty = PageRequest::from_value(serde_json::Value::Null).unwrap();
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageRequest(Map<String, Value>);

impl PageRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ساخت از یک مقدار JSON دلخواه
    ///
    /// # Errors
    /// `BadRequest` اگه مقدار نه object باشه نه `null`
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self(map)),
            other => Err(AppError::BadRequest(format!(
                "Request parameters must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// اضافه کردن یا جایگزینی یک پارامتر
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// ادغام پارامترهای دیگه؛ کلیدهای `other` برنده میشن
    pub fn merge(&mut self, other: PageRequest) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for PageRequest {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<'de> Deserialize<'de> for PageRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(Self(map.unwrap_or_default()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =====================================
// Page Response
// =====================================
/// پاسخ یک page
///
/// # مفاهیم:
/// - Generic: `T` هر داده‌ای که قابل سریالایز باشه
/// - شکل JSON ثابته و نباید تغییر کنه
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T = StatsResult> {
    pub error_code: ErrorCode,
    pub result: PageResult<T>,
}

/// بخش `result` پاسخ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: T,
}

impl<T> PageResponse<T> {
    /// ساخت پاسخ موفق
    pub fn success(data: T) -> Self {
        Self {
            error_code: ErrorCode::SUCCESS,
            result: PageResult { data },
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_code.is_success()
    }

    /// گرفتن داده
    pub fn into_data(self) -> T {
        self.result.data
    }
}
