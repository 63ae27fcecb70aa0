use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_style() -> String {
    "photorealistic".to_string()
}

fn default_size() -> String {
    "1024x1024".to_string()
}

fn default_duration() -> u32 {
    10
}

fn default_video_quality() -> String {
    "high".to_string()
}

fn default_code_language() -> String {
    "python".to_string()
}

fn default_include_tests() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Prompt cannot be empty"))]
    pub prompt: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ImageRequest {
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_size")]
    pub size: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VideoRequest {
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_video_quality")]
    pub quality: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CodeRequest {
    #[validate(length(min = 1, message = "Prompt cannot be empty"))]
    pub prompt: String,
    #[serde(default = "default_code_language")]
    pub language: String,
    #[serde(default = "default_include_tests")]
    pub include_tests: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: String,
    pub model: String,
    pub prompt: String,
    pub response: String,
    pub tokens_used: u32,
    pub processing_time_ms: u32,
    pub filter_level: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub status: String,
    pub description: String,
    pub style: String,
    pub size: String,
    pub image_url: String,
    pub processing_time_ms: u32,
    pub quality: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub status: String,
    pub description: String,
    pub duration: u32,
    pub quality: String,
    pub video_url: String,
    pub format: String,
    pub resolution: String,
    pub fps: u32,
    pub processing_time_ms: u32,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct CodeResponse {
    pub status: String,
    pub language: String,
    pub prompt: String,
    pub code: String,
    pub include_tests: bool,
    pub quality: String,
    pub processing_time_ms: u32,
    pub timestamp: String,
}
