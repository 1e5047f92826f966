use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::parse::flashcards::{self, Flashcard};
use crate::prompts;
use crate::routes::{json_body, require};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FlashcardsRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

/// Generate flashcards for the content source's key concepts.
///
/// The topic is required by the request contract even though the flashcard
/// prompt draws on the whole corpus.
#[utoipa::path(
    post,
    path = "/api/getFlashcards",
    request_body = FlashcardsRequest,
    responses(
        (status = 200, description = "Parsed flashcards", body = FlashcardsResponse),
        (status = 400, description = "Missing topic")
    ),
    tag = "study"
)]
pub async fn get_flashcards(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FlashcardsRequest>, JsonRejection>,
) -> ApiResult<Json<FlashcardsResponse>> {
    let req = json_body(payload)?;
    let _topic = require(req.topic, "Topic is required")?;

    let prompt = prompts::flashcards(&state.config.vector_store_id);
    let reply = state
        .assistant
        .run_prompt(None, &prompt, state.poll)
        .await
        .map_err(|e| ApiError::upstream("Error fetching response from OpenAI", e))?;

    Ok(Json(FlashcardsResponse {
        flashcards: flashcards::parse(&reply.text),
    }))
}
