// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{bank, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Nests the bank routes under `/api/banks`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (bank catalog, config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let bank_routes = Router::new()
        .route("/", get(bank::list_banks))
        .route("/{id}", get(bank::get_bank))
        .route("/{id}/questions", get(bank::list_questions))
        .route("/{id}/report", get(bank::bank_report))
        .route("/{id}/quiz", get(quiz::generate_quiz))
        .route("/{id}/exam", get(quiz::generate_exam));

    Router::new()
        .nest("/api/banks", bank_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
