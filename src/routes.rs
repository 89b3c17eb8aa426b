// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, handlers::question, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the question resource under `/api/questions`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (question store, config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let question_routes = Router::new()
        .route(
            "/",
            get(question::list_questions)
                .post(question::create_questions)
                .put(question::missing_question_id)
                .patch(question::missing_question_id)
                .delete(question::missing_question_id),
        )
        .route(
            "/{id}",
            get(question::get_question)
                .put(question::update_question)
                .patch(question::update_question)
                .delete(question::delete_question),
        );

    Router::new()
        .nest("/api/questions", question_routes)
        .fallback(handlers::route_not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
