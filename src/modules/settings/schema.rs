use serde::{Deserialize, Serialize};

fn default_filter_level() -> String {
    "minimal".to_string()
}

fn default_generation_mode() -> String {
    "comprehensive".to_string()
}

/// Accepted and echoed back; has no effect on any other route.
#[derive(Debug, Deserialize)]
pub struct ConfigRequest {
    #[serde(default = "default_filter_level")]
    pub filter_level: String,
    #[serde(default = "default_generation_mode")]
    pub generation_mode: String,
}

#[derive(Debug, Serialize)]
pub struct AppliedConfig {
    pub filter_level: String,
    pub generation_mode: String,
    pub features_enabled: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub status: String,
    pub config: AppliedConfig,
    pub message: String,
    pub timestamp: String,
}
