use ancla_server::{api::app_router, build_state, config::Config};
use axum::{body::to_bytes, body::Body, http::Request};
use tempfile::tempdir;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_and_openapi_are_served() {
    let tmp = tempdir().unwrap();
    std::env::set_var("ANCLA_DB_PATH", tmp.path().join("test.db"));
    let config = Config::from_env().unwrap();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/api/v1/budget-analytics/{user_id}"].is_object());

    std::env::remove_var("ANCLA_DB_PATH");
}
