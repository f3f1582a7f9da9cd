//! # تست‌های Integration
//!
//! تست‌های end-to-end از طریق router واقعی.
//!
//! ## اجرای تست‌ها:
//! ```bash
//! cargo test                           # همه تست‌ها
//! cargo test --test integration_tests  # فقط این فایل
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use data_stat_page::{
    error::{AppError, Result},
    models::StatsResult,
    services::StatService,
};
use serde_json::Value;

// =====================================
// Stub Collaborator
// =====================================
/// collaborator تستی که تعداد فراخوانی‌ها رو میشمره
#[derive(Clone)]
struct StubStats {
    calls: Arc<AtomicUsize>,
    outcome: std::result::Result<Value, String>,
}

impl StubStats {
    fn returning(value: Value) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome: Ok(value),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome: Err(message.to_string()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatService for StubStats {
    async fn stat(&self) -> Result<StatsResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(AppError::Internal)
    }
}

// =====================================
// تست‌های Page
// =====================================
mod page_tests {
    use super::*;
    use data_stat_page::{
        error::ErrorCode,
        models::PageRequest,
        pages::{Page, StatPage},
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// سناریوی اصلی: `{"visits": 42}` با request خالی
    #[tokio::test]
    async fn test_empty_request_yields_success_envelope() {
        let stub = StubStats::returning(json!({ "visits": 42 }));
        let page = StatPage::new(stub.clone());

        let response = page.execute(PageRequest::new()).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "error_code": 0, "result": { "data": { "visits": 42 } } })
        );
        assert_eq!(stub.calls(), 1);
    }

    /// خطای collaborator به caller میرسه
    #[tokio::test]
    async fn test_fault_surfaces_to_caller() {
        let stub = StubStats::failing("backend exploded");
        let page = StatPage::new(stub.clone());

        let result = page.execute(PageRequest::new().with("anything", 1)).await;

        match result {
            Err(AppError::Internal(msg)) => assert_eq!(msg, "backend exploded"),
            other => panic!("expected propagated fault, got {:?}", other),
        }
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_code_is_shared_constant() {
        let page = StatPage::new(StubStats::returning(json!(null)));

        let response = page.execute(PageRequest::new()).await.unwrap();

        assert_eq!(response.error_code, ErrorCode::SUCCESS);
        assert_eq!(response.error_code.as_i32(), 0);
    }
}

// =====================================
// تست‌های HTTP
// =====================================
mod http_tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use data_stat_page::{
        api::{create_router, REQUEST_ID_HEADER},
        config::Config,
        database::{Database, StatRepository},
        pages::{PageRegistry, StatPage, STAT_ACTION},
        services::AppState,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    async fn app_with(stub: StubStats) -> Router {
        let db = Database::in_memory().await.unwrap();
        let mut pages = PageRegistry::new();
        pages.register(STAT_ACTION, StatPage::new(stub));

        create_router(AppState::new(db, Config::default(), pages))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_stat_returns_envelope() {
        let stub = StubStats::returning(json!({ "visits": 42 }));
        let app = app_with(stub.clone()).await;

        let (status, body) = send(app, get("/api/stat?from=2024-01-01")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "error_code": 0, "result": { "data": { "visits": 42 } } })
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_post_with_arbitrary_or_null_body() {
        let stub = StubStats::returning(json!({ "visits": 1 }));

        for body in [r#"{"anything": 1, "nested": {"x": []}}"#, "null", ""] {
            let app = app_with(stub.clone()).await;
            let (status, json_body) = send(app, post("/api/stat", body)).await;

            assert_eq!(status, StatusCode::OK, "body: {body}");
            assert_eq!(json_body["error_code"], 0);
        }
        assert_eq!(stub.calls(), 3);
    }

    #[tokio::test]
    async fn test_non_object_body_is_rejected_before_dispatch() {
        let stub = StubStats::returning(json!({}));
        let app = app_with(stub.clone()).await;

        let (status, body) = send(app, post("/api/stat", "[1, 2]")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_code"], 1001);
        assert_eq!(stub.calls(), 0);
    }

    /// بدنه بیشتر از حد پیش‌فرض 2MB به 413 میرسه، نه 500
    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let stub = StubStats::returning(json!({}));
        let app = app_with(stub.clone()).await;
        let body = format!(r#"{{"blob": "{}"}}"#, "a".repeat(3 * 1024 * 1024));

        let (status, json_body) = send(app, post("/api/stat", &body)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json_body["error_code"], 1001);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_action_is_404() {
        let app = app_with(StubStats::returning(json!({}))).await;

        let (status, body) = send(app, get("/api/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_code"], 1002);
    }

    #[tokio::test]
    async fn test_collaborator_fault_becomes_500() {
        let app = app_with(StubStats::failing("stat backend down")).await;

        let (status, body) = send(app, get("/api/stat")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error_code"], 2001);
        assert!(body["message"].as_str().unwrap().contains("stat backend down"));
    }

    #[tokio::test]
    async fn test_list_actions() {
        let app = app_with(StubStats::returning(json!({}))).await;

        let (status, body) = send(app, get("/api")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "actions": ["stat"] }));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app_with(StubStats::returning(json!({}))).await;

        let (status, body) = send(app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], true);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_or_generated() {
        let app = app_with(StubStats::returning(json!({}))).await;
        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "req-123")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");

        let app = app_with(StubStats::returning(json!({}))).await;
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER].len(), 12);
    }

    /// مسیر کامل با collaborator واقعی و SQLite
    #[tokio::test]
    async fn test_default_pages_read_counters_from_database() {
        let db = Database::in_memory().await.unwrap();
        let repo = StatRepository::new(db.clone());
        repo.set("visits", 42).await.unwrap();
        repo.increment("users", 2).await.unwrap();

        let app = create_router(AppState::with_default_pages(db, Config::default()));
        let (status, body) = send(app, get("/api/stat")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "error_code": 0, "result": { "data": { "users": 2, "visits": 42 } } })
        );
    }
}

// =====================================
// تست‌های Config
// =====================================
mod config_tests {
    use data_stat_page::config::{Config, ConfigBuilder, Environment};

    #[test]
    fn test_builder_and_validation() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .environment(Environment::Production)
            .build();

        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.environment.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_port_is_invalid() {
        let config = ConfigBuilder::new().port(0).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_environment_is_development() {
        assert!(Config::default().environment.is_development());
    }
}

// =====================================
// Property-Based Tests
// =====================================
mod property_tests {
    use super::*;
    use data_stat_page::{
        error::ErrorCode,
        models::PageRequest,
        pages::{Page, StatPage},
    };
    use proptest::prelude::*;

    proptest! {
        /// هر request‌ای envelope موفق با داده collaborator میده
        /// و collaborator دقیقا یک بار صدا زده میشه
        #[test]
        fn any_request_yields_collaborator_data(
            params in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..8),
            visits in any::<i64>(),
        ) {
            let stub = StubStats::returning(serde_json::json!({ "visits": visits }));
            let page = StatPage::new(stub.clone());

            let request = params
                .into_iter()
                .fold(PageRequest::new(), |req, (k, v)| req.with(k, v));

            let response = tokio_test::block_on(page.execute(request)).unwrap();

            prop_assert_eq!(response.error_code, ErrorCode::SUCCESS);
            prop_assert_eq!(response.into_data(), serde_json::json!({ "visits": visits }));
            prop_assert_eq!(stub.calls(), 1);
        }
    }
}
