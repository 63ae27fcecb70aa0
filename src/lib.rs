use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::config::server::ServerConfig;

pub mod config;
pub mod console;
pub mod error;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(modules::status::routes::routes())
        .merge(modules::generation::routes::routes())
        .merge(modules::language::routes::routes())
        .merge(modules::settings::routes::routes())
        .layer(cors)
        .with_state(state)
}
