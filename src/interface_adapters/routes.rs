use crate::interface_adapters::handlers::matchmaking::{request_match, ticket};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

// Build the local HTTP surface the game client talks to.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/matchmaking/request", post(request_match))
        .route("/matchmaking/ticket", get(ticket))
        .with_state(state)
}
