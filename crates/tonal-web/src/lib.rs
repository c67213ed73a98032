//! tonal-web
//!
//! HTTP surface of the sentiment journal: a submission form that classifies
//! and stores text, and a history page listing every stored result.

use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/",
            get(routes::index::show_form).post(routes::index::submit),
        )
        .route("/history", get(routes::history::show_history))
        .layer(axum_mw::from_fn(middleware::logging::log_request))
        .with_state(state)
}
