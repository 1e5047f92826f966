use utoipa::OpenApi;

use crate::parse::flashcards::Flashcard;
use crate::parse::quiz::{AnsweredQuestion, QuizPayload, QuizQuestion};
use crate::routes;

/// OpenAPI document for the feature routes.
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::chat::get_chat,
        routes::example::get_example,
        routes::flashcards::get_flashcards,
        routes::quiz::get_quiz,
        routes::summary::get_summary,
        routes::upload::upload,
    ),
    components(schemas(
        routes::chat::ChatRequest,
        routes::chat::ChatResponse,
        routes::example::ExampleRequest,
        routes::example::ExampleResponse,
        routes::flashcards::FlashcardsRequest,
        routes::flashcards::FlashcardsResponse,
        routes::quiz::QuizRequest,
        routes::quiz::QuizResponse,
        routes::quiz::FeedbackResponse,
        routes::summary::SummaryRequest,
        routes::summary::SummaryResponse,
        routes::upload::UploadResponse,
        routes::health::HealthResponse,
        Flashcard,
        QuizPayload,
        QuizQuestion,
        AnsweredQuestion,
    )),
    tags(
        (name = "chat", description = "Question answering against the content source"),
        (name = "study", description = "Flashcards, worked examples and summaries"),
        (name = "quiz", description = "Quiz generation and answer feedback"),
        (name = "upload", description = "Content-source file upload"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
