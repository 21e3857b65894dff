//! Axum router wiring.
//!
//! Three routes per the update protocol, plus a JSON 404 fallback so empty
//! name segments and stray paths still get a machine-readable body.

use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/update/:type/:name/:value", post(handlers::update))
        .route("/value/:type/:name", get(handlers::value))
        .route("/", get(handlers::index))
        .fallback(handlers::not_found)
        .with_state(state)
}
