use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub chat: String,
    pub image: String,
    pub video: String,
    pub code: String,
    pub translate: String,
    pub analyze: String,
    pub config: String,
    pub health: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub server: String,
    pub features: Vec<String>,
    pub endpoints: EndpointMap,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: String,
    pub cpu: String,
    pub memory: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_requests: u64,
    pub avg_response_time: u64,
    pub uptime: String,
    pub models_active: Vec<String>,
    pub features_active: u32,
}
