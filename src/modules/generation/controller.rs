use axum::Json;
use chrono::Utc;
use validator::Validate;

use crate::error::ApiResult;
use crate::modules::generation::schema::{
    ChatRequest, ChatResponse, CodeRequest, CodeResponse, ImageRequest, ImageResponse,
    VideoRequest, VideoResponse,
};

pub async fn chat(Json(payload): Json<ChatRequest>) -> ApiResult<Json<ChatResponse>> {
    payload.validate()?;

    let response = format!("Response generated for: {}", payload.prompt);

    Ok(Json(ChatResponse {
        status: "success".to_string(),
        model: payload.model,
        prompt: payload.prompt,
        response,
        tokens_used: 150,
        processing_time_ms: 850,
        filter_level: "minimal".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

pub async fn image(Json(payload): Json<ImageRequest>) -> ApiResult<Json<ImageResponse>> {
    payload.validate()?;

    Ok(Json(ImageResponse {
        status: "success".to_string(),
        description: payload.description,
        style: payload.style,
        size: payload.size,
        image_url: "https://api.example.com/image.jpg".to_string(),
        processing_time_ms: 1200,
        quality: "ultra-premium".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

pub async fn video(Json(payload): Json<VideoRequest>) -> ApiResult<Json<VideoResponse>> {
    payload.validate()?;

    Ok(Json(VideoResponse {
        status: "success".to_string(),
        description: payload.description,
        duration: payload.duration,
        quality: payload.quality,
        video_url: "https://api.example.com/video.mp4".to_string(),
        format: "MP4 (H.264)".to_string(),
        resolution: "1080p".to_string(),
        fps: 60,
        processing_time_ms: 2000,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

pub async fn code(Json(payload): Json<CodeRequest>) -> ApiResult<Json<CodeResponse>> {
    payload.validate()?;

    let code = format!(
        "# Generated {} Code\n\n# Requirement: {}\n\ndef main():\n    # Implementation here\n    pass\n\nif __name__ == '__main__':\n    main()",
        payload.language.to_uppercase(),
        payload.prompt
    );

    Ok(Json(CodeResponse {
        status: "success".to_string(),
        language: payload.language,
        prompt: payload.prompt,
        code,
        include_tests: payload.include_tests,
        quality: "production-ready".to_string(),
        processing_time_ms: 1000,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
