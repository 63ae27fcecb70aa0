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
        .merge(modules::generation::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_chat_echoes_prompt() {
    let server = setup_test_server();

    let response = server
        .post("/api/chat")
        .json(&json!({
            "prompt": "Write a haiku about rain"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["prompt"], "Write a haiku about rain");
    assert_eq!(
        body["response"],
        "Response generated for: Write a haiku about rain"
    );
    assert_eq!(body["tokens_used"], 150);
    assert_eq!(body["filter_level"], "minimal");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_chat_applies_defaults() {
    let server = setup_test_server();

    let response = server
        .post("/api/chat")
        .json(&json!({
            "prompt": "hello"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["model"], "gpt-4");
}

#[tokio::test]
async fn test_chat_empty_prompt_fails() {
    let server = setup_test_server();

    let response = server
        .post("/api/chat")
        .json(&json!({
            "prompt": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("Prompt cannot be empty"));
}

#[tokio::test]
async fn test_image_returns_placeholder_url() {
    let server = setup_test_server();

    let response = server
        .post("/api/image")
        .json(&json!({
            "description": "a lighthouse at dusk",
            "style": "watercolor"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["description"], "a lighthouse at dusk");
    assert_eq!(body["style"], "watercolor");
    assert_eq!(body["size"], "1024x1024");
    assert_eq!(body["image_url"], "https://api.example.com/image.jpg");
    assert_eq!(body["quality"], "ultra-premium");
}

#[tokio::test]
async fn test_image_empty_description_fails() {
    let server = setup_test_server();

    let response = server
        .post("/api/image")
        .json(&json!({
            "description": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("Description cannot be empty"));
}

#[tokio::test]
async fn test_video_returns_fixed_media_facts() {
    let server = setup_test_server();

    let response = server
        .post("/api/video")
        .json(&json!({
            "description": "timelapse of a city",
            "duration": 30
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["description"], "timelapse of a city");
    assert_eq!(body["duration"], 30);
    assert_eq!(body["quality"], "high");
    assert_eq!(body["video_url"], "https://api.example.com/video.mp4");
    assert_eq!(body["format"], "MP4 (H.264)");
    assert_eq!(body["resolution"], "1080p");
    assert_eq!(body["fps"], 60);
}

#[tokio::test]
async fn test_video_empty_description_fails() {
    let server = setup_test_server();

    let response = server
        .post("/api/video")
        .json(&json!({
            "description": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_code_template_embeds_language_and_prompt() {
    let server = setup_test_server();

    let response = server
        .post("/api/code")
        .json(&json!({
            "prompt": "parse a CSV file",
            "language": "rust"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["language"], "rust");
    assert_eq!(body["include_tests"], true);

    let code = body["code"].as_str().unwrap();
    assert!(code.contains("# Generated RUST Code"));
    assert!(code.contains("# Requirement: parse a CSV file"));
}

#[tokio::test]
async fn test_code_empty_prompt_fails() {
    let server = setup_test_server();

    let response = server
        .post("/api/code")
        .json(&json!({
            "prompt": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
