use axum::Json;
use chrono::Utc;

use crate::modules::status::schema::{EndpointMap, HealthResponse, RootResponse, StatsResponse};

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ACTIVE".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
        server: "Advanced AI API Server".to_string(),
        features: vec![
            "AI Chat Generation".to_string(),
            "Image Generation".to_string(),
            "Video Generation".to_string(),
            "Code Generation".to_string(),
            "Text Translation".to_string(),
            "Data Analysis".to_string(),
            "Multi-Source Analysis".to_string(),
            "Advanced ML Models".to_string(),
        ],
        endpoints: EndpointMap {
            chat: "/api/chat".to_string(),
            image: "/api/image".to_string(),
            video: "/api/video".to_string(),
            code: "/api/code".to_string(),
            translate: "/api/translate".to_string(),
            analyze: "/api/analyze".to_string(),
            config: "/api/config".to_string(),
            health: "/health".to_string(),
        },
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime: "100%".to_string(),
        cpu: "optimal".to_string(),
        memory: "optimal".to_string(),
    })
}

pub async fn stats() -> Json<StatsResponse> {
    Json(StatsResponse {
        total_requests: 0,
        avg_response_time: 0,
        uptime: "100%".to_string(),
        models_active: vec![
            "GPT-4".to_string(),
            "GPT-3.5".to_string(),
            "Claude-3".to_string(),
        ],
        features_active: 8,
    })
}
