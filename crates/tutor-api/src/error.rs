use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use tutor_assistant::AssistantError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    /// Failure anywhere in the outbound request cycle. The public message
    /// stays generic per feature; the source error keeps the distinction
    /// (transport vs. API status vs. run failure vs. timeout) for the logs.
    #[error("{message}")]
    Upstream {
        message: String,
        #[source]
        source: AssistantError,
    },

    /// The quiz reply was not the expected JSON envelope. The raw text is
    /// carried into the response for diagnosis.
    #[error("Invalid question format received")]
    QuizFormat { raw: String },
}

impl ApiError {
    pub fn upstream(message: impl Into<String>, source: AssistantError) -> Self {
        Self::Upstream {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(ref message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "Not found" })),
            ApiError::Upstream {
                ref message,
                ref source,
            } => {
                tracing::error!(error = %source, "assistant request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
            ApiError::QuizFormat { ref raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Invalid question format received", "raw": raw }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
