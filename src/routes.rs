use crate::config::Settings;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub mod calculate;

pub fn router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/calculate", post(calculate::calculate))
        .route("/health", get(health))
        .with_state(settings)
}

async fn health() -> &'static str {
    "ok"
}
