use axum::Json;
use chrono::Utc;
use validator::Validate;

use crate::error::ApiResult;
use crate::modules::language::schema::{
    AnalysisRequest, AnalysisResponse, Statistics, TranslateRequest, TranslateResponse,
};

pub async fn translate(Json(payload): Json<TranslateRequest>) -> ApiResult<Json<TranslateResponse>> {
    payload.validate()?;

    let translated_text = format!("[Translated to {}]", payload.target_language);

    Ok(Json(TranslateResponse {
        status: "success".to_string(),
        original_text: payload.text,
        target_language: payload.target_language,
        translated_text,
        quality_score: 99.2,
        processing_time_ms: 600,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

pub async fn analyze(Json(payload): Json<AnalysisRequest>) -> ApiResult<Json<AnalysisResponse>> {
    payload.validate()?;

    Ok(Json(AnalysisResponse {
        status: "success".to_string(),
        analysis_type: payload.analysis_type,
        data_summary: "Analysis complete".to_string(),
        statistics: Statistics {
            mean: 3.5,
            median: 3,
            std_dev: 1.41,
            trend: "increasing".to_string(),
        },
        ml_insights: payload.include_ml,
        confidence: 98.5,
        processing_time_ms: 900,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
