use axum::{routing::post, Router};

use crate::modules::generation::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(controller::chat))
        .route("/api/image", post(controller::image))
        .route("/api/video", post(controller::video))
        .route("/api/code", post(controller::code))
}
