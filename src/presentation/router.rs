use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_notes_handler, health_handler, summarize_and_notes_handler, summarize_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L>(state: AppState<F, L>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = state.upload_limit_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route("/summarize", post(summarize_handler::<F, L>))
        .route("/create-notes", post(create_notes_handler::<F, L>))
        .route(
            "/summarize-and-notes",
            post(summarize_and_notes_handler::<F, L>),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
