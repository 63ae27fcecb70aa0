use axum::Json;
use chrono::Utc;

use crate::modules::settings::schema::{AppliedConfig, ConfigRequest, ConfigResponse};

pub async fn apply_config(Json(payload): Json<ConfigRequest>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        status: "success".to_string(),
        config: AppliedConfig {
            filter_level: payload.filter_level,
            generation_mode: payload.generation_mode,
            features_enabled: vec![
                "Minimal Content Filtering".to_string(),
                "Extended Response Length".to_string(),
                "Multi-Source Analysis".to_string(),
                "Advanced ML Models".to_string(),
                "Real-time Data Integration".to_string(),
                "Custom Prompt Engineering".to_string(),
            ],
        },
        message: "Configuration applied successfully".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
