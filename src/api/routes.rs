//! Router setup and shared state.
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::openai::OpenAIClient;

pub struct AppState {
    pub client: OpenAIClient,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate_form))
        .route("/api/generate", post(handlers::generate_json))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
