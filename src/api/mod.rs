//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Extractors**: استخراج داده از request
//! - **State**: اشتراک state بین handlers
//! - **Tower**: زیرساخت middleware
//!
//! ## ساختار URL‌ها:
//! - `GET /api` - لیست action‌ها
//! - `GET /api/:action` - اجرای page با پارامترهای query
//! - `POST /api/:action` - اجرای page با بدنه JSON
//! - `GET /health` - Health check

mod extractors;
mod handlers;
mod middleware;

pub use extractors::*;
pub use handlers::*;
pub use middleware::*;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::services::AppState;

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `.merge()`: ترکیب route‌ها
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
///
/// timeout از `Config::request_timeout` خونده میشه
pub fn create_router(state: AppState) -> Router {
    let timeout = state.config().request_timeout();

    Router::new()
        .merge(api_routes())
        .route("/health", get(handlers::health::health_check))
        .layer(
            ServiceBuilder::new()
                // ServiceBuilder از بالا به پایین اجرا میشه
                .layer(axum_middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_timing))
                .layer(TimeoutLayer::new(timeout))
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Route‌های API
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(handlers::page::list_actions))
        .route(
            "/api/:action",
            get(handlers::page::dispatch).post(handlers::page::dispatch),
        )
}
