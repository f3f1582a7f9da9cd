//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات سرویس هست.
//!
//! ## منابع تنظیمات
//! - متغیرهای محیطی (و فایل `.env` از طریق dotenvy) با [`Config::from_env`]
//! - فایل تنظیمات + متغیرهای `APP_*` با crate `config` از طریق [`Config::load`]
//!
//! ## مفاهیم Rust:
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Serde**: سریالایز/دسریالایز
//! - **Builder Pattern**: ساخت تدریجی آبجکت

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// آدرس دیتابیس پیش‌فرض
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/stats.db?mode=rwc";

/// تنظیمات اصلی برنامه
///
/// # مثال
/// ```rust
/// use data_stat_page::config::Config;
///
/// let config = Config::default();
/// println!("Port: {}", config.port);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس اتصال به دیتابیس آمار
    pub database_url: String,

    /// حداکثر زمان پردازش هر request (ثانیه)
    pub request_timeout_secs: u64,

    /// محیط اجرا (development, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه - با لاگ pretty
    #[default]
    Development,

    /// محیط تولید - لاگ JSON
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
///
/// مقدار ناشناخته به Development برمیگرده
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            request_timeout_secs: 30,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// # Errors
    /// در حال حاضر همیشه `Ok` برمیگردونه؛ مقدار نامعتبر با پیش‌فرض جایگزین میشه.
    /// برای بررسی سخت‌گیرانه از [`Config::validate`] استفاده کنید.
    ///
    /// # مثال
    /// ```rust,no_run
    /// use data_stat_page::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load config");
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// ساخت تنظیمات از یه تابع lookup دلخواه
    ///
    /// [`Config::from_env`] همین رو با `env::var` صدا میزنه.
    ///
    /// # Errors
    /// همیشه `Ok`؛ مقدار نامعتبر با پیش‌فرض جایگزین میشه.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let get_env = |key: &str, default: String| -> String { lookup(key).unwrap_or(default) };

        // helper برای parse کردن عدد
        let parse_env = |key: &str, default: u64| -> u64 {
            lookup(key)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        let port = lookup("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Ok(Self {
            host: get_env("HOST", defaults.host),
            port,
            database_url: get_env("DATABASE_URL", defaults.database_url),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            environment: lookup("ENVIRONMENT")
                .map(Environment::from)
                .unwrap_or_default(),
        })
    }

    /// لود تنظیمات از فایل (اختیاری) و متغیرهای `APP_*`
    ///
    /// # مفاهیم:
    /// - Layered configuration: پیش‌فرض‌ها، بعد فایل، بعد محیط
    /// - `required(false)`: نبودن فایل خطا نیست
    ///
    /// متغیرهای محیطی مثل `APP_PORT=8080` روی فایل اولویت دارن.
    ///
    /// # Errors
    /// اگه فایل یا مقادیر محیطی قابل parse نباشن
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// مثل [`Config::load`]، ولی متغیرهای `APP_*` از `env_source` خونده میشن
    ///
    /// `None` یعنی محیط واقعی process.
    ///
    /// # Errors
    /// اگه فایل یا مقادیر محیطی قابل parse نباشن
    pub fn load_with_env(
        path: Option<&str>,
        env_source: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = ::config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .set_default("environment", "development")?;

        if let Some(path) = path {
            builder = builder.add_source(::config::File::with_name(path).required(false));
        }

        let config: Self = builder
            .add_source(::config::Environment::with_prefix("APP").source(env_source))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # Errors
    /// - پورت صفر
    /// - timeout صفر
    /// - دیتابیس in-memory در production
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        // داده‌های آمار در production نباید با ری‌استارت از بین برن
        if self.environment.is_production() && self.database_url.contains(":memory:") {
            return Err(AppError::Config(
                "DATABASE_URL cannot be in-memory in production".to_string(),
            ));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// timeout به صورت Duration برای TimeoutLayer
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مثال
/// ```rust
/// use data_stat_page::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("0.0.0.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم database_url
    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// تنظیم timeout
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
