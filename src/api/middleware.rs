//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response
//!
//! ## مفاهیم:
//! - **Middleware**: کد که قبل/بعد از handler اجرا میشه
//! - **Next**: ادامه زنجیره middleware
//! - با `axum::middleware::from_fn` به router اضافه میشن

use std::time::Instant;

use axum::{
    body::Body,
    http::{header::HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

/// نام header شناسه request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =====================================
// Request Timing Middleware
// =====================================
/// اندازه‌گیری زمان پردازش request
///
/// # استفاده:
/// ```rust,ignore
/// let app = Router::new()
///     .layer(axum::middleware::from_fn(request_timing));
/// ```
pub async fn request_timing(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}

// =====================================
// Request ID Middleware
// =====================================
/// اضافه کردن Request ID به هر request و response
///
/// اگه کلاینت `X-Request-Id` معتبر فرستاده باشه همون استفاده میشه،
/// وگرنه یه ID جدید با nanoid ساخته میشه.
pub async fn request_id(mut request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .cloned()
        .unwrap_or_else(generate_request_id);

    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(request).await;

    response
        .headers_mut()
        .insert(REQUEST_ID_HEADER, request_id);

    response
}

/// تولید request ID جدید
///
/// الفبای nanoid فقط کاراکترهای URL-safe داره، پس همیشه header معتبره
fn generate_request_id() -> HeaderValue {
    HeaderValue::from_str(&nanoid::nanoid!(12))
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}
