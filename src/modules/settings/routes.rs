use axum::{routing::post, Router};

use crate::modules::settings::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/config", post(controller::apply_config))
}
