//! API routes module
//!
//! All HTTP routes of the bookshelf service, merged at the root by
//! `axum_helpers::create_router`.

pub mod books;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/books", books::router(state))
        .merge(health::router(state.clone()))
}

async fn index() -> &'static str {
    "Hello World!"
}
