use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::docs::ApiDoc;
use crate::middleware::logging;
use crate::routes;
use crate::state::AppState;

/// Uploads forwarded to the file store can exceed axum's 2 MB default
/// body limit.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Feature routes, POST-only; other methods get the JSON 405
        .route(
            "/api/getChat",
            post(routes::chat::get_chat).fallback(routes::method_not_allowed),
        )
        .route(
            "/api/getExample",
            post(routes::example::get_example).fallback(routes::method_not_allowed),
        )
        .route(
            "/api/getFlashcards",
            post(routes::flashcards::get_flashcards).fallback(routes::method_not_allowed),
        )
        .route(
            "/api/getQuiz",
            post(routes::quiz::get_quiz).fallback(routes::method_not_allowed),
        )
        .route(
            "/api/getSummary",
            post(routes::summary::get_summary).fallback(routes::method_not_allowed),
        )
        .route(
            "/api/upload",
            post(routes::upload::upload).fallback(routes::method_not_allowed),
        );

    // Build full router with middleware
    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(Duration::from_secs(300))) // bound for poll-heavy requests
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let mut cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors = cors.allow_origin(Any);
        } else {
            for origin in &config.cors.origins {
                if let Ok(parsed_origin) = origin.parse::<axum::http::HeaderValue>() {
                    cors = cors.allow_origin(parsed_origin);
                }
            }
        }

        cors
    } else {
        CorsLayer::permissive()
    }
}
