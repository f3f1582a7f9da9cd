//! # Page Handlers
//!
//! dispatch کردن request‌ها به page متناظر با action

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::extractors::PageInput,
    error::Result,
    models::{ActionList, PageResponse, StatsResult},
    services::AppState,
};

// =====================================
// Dispatch
// =====================================
/// اجرای page
///
/// # Endpoint
/// `GET /api/:action?k=v`
/// `POST /api/:action`
///
/// # Response
/// ```json
/// {
///   "error_code": 0,
///   "result": { "data": { "visits": 42 } }
/// }
/// ```
pub async fn dispatch(
    State(state): State<AppState>,
    Path(action): Path<String>,
    PageInput(request): PageInput,
) -> Result<Json<PageResponse<StatsResult>>> {
    let response = state.pages.dispatch(&action, request).await?;

    Ok(Json(response))
}

// =====================================
// List Actions
// =====================================
/// لیست action‌های ثبت شده
///
/// # Endpoint
/// `GET /api`
pub async fn list_actions(State(state): State<AppState>) -> Json<ActionList> {
    Json(ActionList {
        actions: state.pages.actions(),
    })
}
