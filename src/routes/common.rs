//! Service routes: GET /, GET /config, GET /health, GET /ready.

use crate::handlers::common::{health, ready, root, show_config};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/config", get(show_config))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
