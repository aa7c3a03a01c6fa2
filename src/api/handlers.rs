use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{
        AiRecommendation, AiRecommendationRequest, NewsletterRequest, NewsletterResponse,
        Recommendation, StudyPreferences,
    },
    services::{generate_recommendations, newsletter},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Newsletter sign-up
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> AppResult<Json<NewsletterResponse>> {
    let Json(request) = payload?;

    let response = newsletter::register(state.subscriptions.clone(), request).await?;

    tracing::info!(request_id = %request_id, "Newsletter subscription accepted");

    Ok(Json(response))
}

/// Model-generated recommendations, degraded to a static plan on bad output
pub async fn ai_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AiRecommendationRequest>, JsonRejection>,
) -> AppResult<Json<AiRecommendation>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        learning_style = ?request.learning_style,
        interests_count = request.interests.len(),
        "Processing AI recommendation request"
    );

    let recommendation = state.ai_adapter.recommend(&request).await?;

    tracing::info!(request_id = %request_id, "AI recommendations generated");

    Ok(Json(recommendation))
}

/// Rule-based recommendations for a completed quiz
pub async fn recommendations(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<StudyPreferences>, JsonRejection>,
) -> AppResult<Json<Recommendation>> {
    let Json(preferences) = payload?;

    tracing::info!(
        request_id = %request_id,
        learning_style = preferences.learning_style.as_str(),
        break_frequency = ?preferences.break_frequency,
        "Generating rule-based recommendations"
    );

    Ok(Json(generate_recommendations(&preferences)))
}
