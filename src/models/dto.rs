//! # Data Transfer Objects (DTOs)
//!
//! DTO‌های عمومی که خارج از envelope page‌ها استفاده میشن

use serde::{Deserialize, Serialize};

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
}

impl HealthResponse {
    /// ساخت پاسخ health
    ///
    /// اگه دیتابیس در دسترس نباشه وضعیت `degraded` میشه
    #[must_use]
    pub fn healthy(database_ok: bool) -> Self {
        Self {
            status: if database_ok { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database_ok,
            uptime_seconds: None,
        }
    }

    /// اضافه کردن uptime
    #[must_use]
    pub fn with_uptime(mut self, seconds: u64) -> Self {
        self.uptime_seconds = Some(seconds);
        self
    }
}

// =====================================
// Actions
// =====================================
/// لیست action‌های ثبت شده
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionList {
    pub actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status() {
        assert_eq!(HealthResponse::healthy(true).status, "healthy");

        let degraded = HealthResponse::healthy(false).with_uptime(5);
        assert_eq!(degraded.status, "degraded");
        assert_eq!(degraded.uptime_seconds, Some(5));
    }
}
