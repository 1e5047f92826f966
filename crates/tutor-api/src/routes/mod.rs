pub mod chat;
pub mod example;
pub mod flashcards;
pub mod health;
pub mod quiz;
pub mod summary;
pub mod upload;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::{ApiError, ApiResult};

/// Unwrap a JSON body, turning extractor rejections into the standard 400
/// envelope instead of axum's plain-text rejection.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected request body");
        ApiError::BadRequest("Invalid request body".to_string())
    })?;
    Ok(body)
}

/// Require a present, non-empty string field.
pub(crate) fn require(value: Option<String>, message: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::BadRequest(message.to_string())),
    }
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound
}
