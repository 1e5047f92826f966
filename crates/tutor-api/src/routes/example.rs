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
pub struct ExampleRequest {
    pub topic: Option<String>,
}

/// The raw step-by-step text; clients split it into steps for the walkthrough.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExampleResponse {
    pub example: String,
}

/// Generate a step-by-step worked example for a topic.
#[utoipa::path(
    post,
    path = "/api/getExample",
    request_body = ExampleRequest,
    responses(
        (status = 200, description = "Worked example", body = ExampleResponse),
        (status = 400, description = "Missing topic")
    ),
    tag = "study"
)]
pub async fn get_example(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExampleRequest>, JsonRejection>,
) -> ApiResult<Json<ExampleResponse>> {
    let req = json_body(payload)?;
    let topic = require(req.topic, "Topic is required")?;

    let prompt = prompts::example(&topic, &state.config.vector_store_id);
    let reply = state
        .assistant
        .run_prompt(None, &prompt, state.poll)
        .await
        .map_err(|e| ApiError::upstream("Error fetching response from OpenAI", e))?;

    Ok(Json(ExampleResponse {
        example: reply.text,
    }))
}
