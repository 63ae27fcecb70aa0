use axum::{routing::post, Router};

use crate::modules::language::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/translate", post(controller::translate))
        .route("/api/analyze", post(controller::analyze))
}
