use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use axum_test::TestServer;
use codex_network::error::{ApiError, ApiResult};

async fn failing_handler() -> ApiResult<&'static str> {
    Err(ApiError::Internal("backend exploded".to_string()))
}

#[tokio::test]
async fn test_internal_error_maps_to_500_with_detail() {
    let app = Router::new().route("/boom", get(failing_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "backend exploded");
}

#[tokio::test]
async fn test_validation_error_maps_to_400() {
    let app = Router::new().route(
        "/invalid",
        get(|| async { Err::<&'static str, _>(ApiError::Validation("Prompt cannot be empty".to_string())) }),
    );
    let server = TestServer::new(app).unwrap();

    let response = server.get("/invalid").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Prompt cannot be empty");
}
