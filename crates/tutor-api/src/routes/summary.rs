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
pub struct SummaryRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Summarize a topic.
#[utoipa::path(
    post,
    path = "/api/getSummary",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Topic summary", body = SummaryResponse),
        (status = 400, description = "Missing topic")
    ),
    tag = "study"
)]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> ApiResult<Json<SummaryResponse>> {
    let req = json_body(payload)?;
    let topic = require(req.topic, "Topic is required")?;

    let prompt = prompts::summary(&topic);
    let reply = state
        .assistant
        .run_prompt(None, &prompt, state.poll)
        .await
        .map_err(|e| ApiError::upstream("Error fetching response from OpenAI", e))?;

    Ok(Json(SummaryResponse {
        summary: reply.text,
    }))
}
