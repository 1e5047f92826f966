use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::parse::quiz::{self, AnsweredQuestion, QuizQuestion};
use crate::parse::feedback;
use crate::prompts;
use crate::registry::ThreadStatus;
use crate::routes::{json_body, require};
use crate::state::AppState;

/// The quiz route multiplexes two actions on one path: generating a fresh
/// quiz, and a feedback follow-up turn on a previously issued quiz thread.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "action")]
pub enum QuizRequest {
    #[serde(rename = "getQuiz")]
    GetQuiz,
    #[serde(rename = "getFeedback")]
    GetFeedback {
        #[serde(rename = "threadId")]
        thread_id: Option<String>,
        #[serde(rename = "answeredQuestions", default)]
        answered_questions: Vec<AnsweredQuestion>,
    },
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
    #[serde(rename = "threadId")]
    pub thread_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// Generate a quiz, or produce feedback for a finished one.
#[utoipa::path(
    post,
    path = "/api/getQuiz",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Quiz questions or feedback prose", body = QuizResponse),
        (status = 400, description = "Unknown or expired thread"),
        (status = 500, description = "Quiz reply was not valid JSON")
    ),
    tag = "quiz"
)]
pub async fn get_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Response> {
    match json_body(payload)? {
        QuizRequest::GetQuiz => generate_quiz(&state).await,
        QuizRequest::GetFeedback {
            thread_id,
            answered_questions,
        } => generate_feedback(&state, thread_id, answered_questions).await,
    }
}

async fn generate_quiz(state: &AppState) -> ApiResult<Response> {
    let prompt = prompts::quiz(&state.config.vector_store_id);
    let reply = state
        .assistant
        .run_prompt(None, &prompt, state.poll)
        .await
        .map_err(|e| ApiError::upstream("Error fetching quiz", e))?;

    // The thread stays eligible for a feedback turn even if parsing fails;
    // the client may retry the same quiz thread.
    state.registry.register(&reply.thread_id).await;

    let payload = quiz::parse(&reply.text).map_err(|e| {
        tracing::error!(error = %e, "quiz reply was not the expected JSON envelope");
        ApiError::QuizFormat {
            raw: reply.text.clone(),
        }
    })?;

    Ok(Json(QuizResponse {
        questions: payload.questions,
        thread_id: reply.thread_id,
    })
    .into_response())
}

async fn generate_feedback(
    state: &AppState,
    thread_id: Option<String>,
    answered_questions: Vec<AnsweredQuestion>,
) -> ApiResult<Response> {
    let thread_id = require(thread_id, "Invalid thread ID")?;

    match state.registry.status(&thread_id).await {
        ThreadStatus::Active => {}
        ThreadStatus::Expired => {
            return Err(ApiError::BadRequest("Thread expired".to_string()));
        }
        ThreadStatus::Unknown => {
            return Err(ApiError::BadRequest("Invalid thread ID".to_string()));
        }
    }

    let wrong_answers: Vec<AnsweredQuestion> = answered_questions
        .into_iter()
        .filter(|q| q.is_wrong())
        .collect();

    let prompt = prompts::feedback(&wrong_answers);
    let reply = state
        .assistant
        .run_prompt(Some(thread_id), &prompt, state.poll)
        .await
        .map_err(|e| ApiError::upstream("Error generating feedback", e))?;

    Ok(Json(FeedbackResponse {
        feedback: feedback::clean(&reply.text),
    })
    .into_response())
}
