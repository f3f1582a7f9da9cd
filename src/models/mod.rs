//! # ماژول مدل‌ها
//!
//! مدل‌های داده‌ای که بین لایه API و page‌ها رد و بدل میشن.
//!
//! ## تفاوت انواع مدل:
//! - **Envelope**: قالب ورودی/خروجی page‌ها (`PageRequest`, `PageResponse`)
//! - **DTO**: پاسخ‌های جانبی مثل health check

mod dto;
mod envelope;

// Re-export همه مدل‌ها
pub use dto::*;
pub use envelope::*;
