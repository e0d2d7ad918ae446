use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

pub const AI_NOT_CONFIGURED_MESSAGE: &str = "Gemini API key not configured on server.";
pub const AI_SERVICE_MESSAGE: &str = "Failed to get explanation from AI model.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("{}", AI_NOT_CONFIGURED_MESSAGE)]
    AiNotConfigured,

    #[error("Explanation generation failed (Safety Block: {0})")]
    GenerationBlocked(String),

    /// The detail is logged at the route boundary and never sent to clients.
    #[error("AI service error: {0}")]
    AiService(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::InvalidImage(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, err.body_text()),
            Error::AiNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                AI_NOT_CONFIGURED_MESSAGE.to_string(),
            ),
            err @ Error::GenerationBlocked(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Error::AiService(detail) => {
                tracing::error!(detail = %detail, "AI service call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, AI_SERVICE_MESSAGE.to_string())
            }
            Error::Reqwest(err) => {
                tracing::error!(error = ?err, "Outbound HTTP request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, AI_SERVICE_MESSAGE.to_string())
            }
            Error::Database(err) => {
                tracing::error!(error = ?err, "Database operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<MultipartRejection> for Error {
    fn from(rejection: MultipartRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}
