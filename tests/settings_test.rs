use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use codex_network::config::server::ServerConfig;
use codex_network::{modules, AppState};
use serde_json::json;

fn setup_test_server() -> TestServer {
    let state = AppState {
        config: ServerConfig::from_env(),
    };

    let app = Router::new()
        .merge(modules::settings::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_config_defaults_applied() {
    let server = setup_test_server();

    let response = server.post("/api/config").json(&json!({})).await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["config"]["filter_level"], "minimal");
    assert_eq!(body["config"]["generation_mode"], "comprehensive");
    assert_eq!(body["message"], "Configuration applied successfully");

    let features = body["config"]["features_enabled"].as_array().unwrap();
    assert_eq!(features.len(), 6);
}

#[tokio::test]
async fn test_config_echoes_custom_values() {
    let server = setup_test_server();

    let response = server
        .post("/api/config")
        .json(&json!({
            "filter_level": "strict",
            "generation_mode": "fast"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["config"]["filter_level"], "strict");
    assert_eq!(body["config"]["generation_mode"], "fast");
}
