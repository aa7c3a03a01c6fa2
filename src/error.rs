use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Subscription error: {0}")]
    Subscription(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::HttpClient(_) | AppError::ExternalApi(_) => {
                tracing::error!(error = %self, "AI recommendation request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate AI recommendations".to_string(),
                )
            }
            AppError::Subscription(_) => {
                tracing::error!(error = %self, "Newsletter subscription error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error during subscription".to_string(),
                )
            }
            AppError::Internal(_) => {
                tracing::error!(error = %self, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
