//! # Custom Extractors
//!
//! ساخت `PageRequest` از query string و بدنه JSON.
//!
//! ## چطور کار میکنه؟
//! - جفت‌های query به مقدار string تبدیل میشن
//! - بدنه JSON (اگه باشه) روی query ادغام میشه
//! - بدنه خالی یا `null` یعنی mapping خالی

use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Query, Request},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    error::AppError,
    models::PageRequest,
};

/// پارامترهای ورودی page
///
/// # استفاده در handler:
/// ```rust,ignore
/// async fn handler(PageInput(request): PageInput) -> ... {
///     // request یه PageRequest هست
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageInput(pub PageRequest);

#[async_trait]
impl<S> FromRequest<S> for PageInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut request: PageRequest = query
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect::<serde_json::Map<String, Value>>()
            .into();

        let body = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        if !body.iter().all(u8::is_ascii_whitespace) {
            let value: Value = serde_json::from_slice(&body)
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;
            request.merge(PageRequest::from_value(value)?);
        }

        Ok(PageInput(request))
    }
}

/// خطای خواندن بدنه (مثلا عبور از `DefaultBodyLimit`) خطای کاربر هست نه سرور
fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::BadRequest(rejection.body_text())
    }
}
