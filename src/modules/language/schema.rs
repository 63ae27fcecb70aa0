use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_analysis_type() -> String {
    "summary".to_string()
}

fn default_include_ml() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: String,
    pub target_language: String,
}

/// `data` is an opaque string; it is validated for presence and never parsed.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalysisRequest {
    #[validate(length(min = 1, message = "Data cannot be empty"))]
    pub data: String,
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
    #[serde(default = "default_include_ml")]
    pub include_ml: bool,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub status: String,
    pub original_text: String,
    pub target_language: String,
    pub translated_text: String,
    pub quality_score: f64,
    pub processing_time_ms: u32,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub median: u32,
    pub std_dev: f64,
    pub trend: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub analysis_type: String,
    pub data_summary: String,
    pub statistics: Statistics,
    pub ml_insights: bool,
    pub confidence: f64,
    pub processing_time_ms: u32,
    pub timestamp: String,
}
