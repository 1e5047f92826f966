use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::prompts;
use crate::routes::{json_body, require};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub question: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub answer: String,
}

/// Answer a free-form question against the content source.
#[utoipa::path(
    post,
    path = "/api/getChat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant answer", body = ChatResponse),
        (status = 400, description = "Missing question")
    ),
    tag = "chat"
)]
pub async fn get_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let req = json_body(payload)?;
    let question = require(req.question, "Question is required")?;

    let prompt = prompts::chat(&question, &state.config.vector_store_id);
    let reply = state
        .assistant
        .run_prompt(None, &prompt, state.poll)
        .await
        .map_err(|e| ApiError::upstream("Error fetching response from OpenAI", e))?;

    Ok(Json(ChatResponse { answer: reply.text }))
}
