//! # Data Stat Page - نقطه ورود برنامه
//!
//! ترتیب راه‌اندازی:
//! 1. لود `.env` و راه‌اندازی tracing
//! 2. لود و اعتبارسنجی تنظیمات
//! 3. اتصال به دیتابیس و اجرای migration‌ها
//! 4. ساخت registry page‌ها و اجرای سرور

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use data_stat_page::{
    api::create_router,
    config::Config,
    database::Database,
    error::{AppError, Result, ResultExt},
    services::AppState,
};

/// نقطه ورود اصلی برنامه
///
/// # Errors
/// خطا برمیگردونه اگه:
/// - تنظیمات نامعتبر باشن
/// - دیتابیس متصل نشه
/// - سرور استارت نشه
#[tokio::main]
async fn main() -> Result<()> {
    // اگه فایل .env نباشه اوکیه
    dotenvy::dotenv().ok();

    let config = match std::env::var("CONFIG_FILE") {
        Ok(path) => Config::load(Some(&path))?,
        Err(_) => Config::from_env()?,
    };

    init_tracing(&config);

    info!("🚀 Starting Data Stat Page Service...");

    config.validate()?;
    info!(environment = ?config.environment, "✅ Configuration loaded successfully");

    let database = Database::connect(&config.database_url).await?;
    database.migrate().await?;
    info!("✅ Database connected and migrated");

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid HOST/PORT: {}", e)))?;

    let state = AppState::with_default_pages(database, config);
    info!(actions = ?state.pages.actions(), "✅ Pages registered");

    let app = create_router(state);

    info!("🌐 Server listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_internal()?;

    info!("👋 Server stopped");
    Ok(())
}

/// راه‌اندازی سیستم tracing
///
/// - EnvFilter از متغیر RUST_LOG میخونه
/// - production: خروجی JSON، بقیه: خروجی pretty
fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("data_stat_page=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.environment.is_production() {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .init();
    }
}

/// منتظر Ctrl+C برای خاموش شدن تمیز
async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// اگه نصب handler سیگنال شکست بخوره، سرور تا ابد به کارش ادامه میده
async fn wait_for_signal(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_signal_error_does_not_trigger_shutdown() {
        let failed = async { Err(std::io::Error::other("no signal handler")) };

        let result = tokio::time::timeout(Duration::from_millis(50), wait_for_signal(failed)).await;

        assert!(result.is_err(), "shutdown future must stay pending");
    }

    #[tokio::test]
    async fn test_signal_received_triggers_shutdown() {
        let received = async { Ok(()) };

        let result = tokio::time::timeout(Duration::from_secs(1), wait_for_signal(received)).await;

        assert!(result.is_ok());
    }
}
