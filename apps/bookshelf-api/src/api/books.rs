//! Books API routes
//!
//! Wires the books domain to the configured store.

use axum::Router;
use domain_books::{BookService, InMemoryBookRepository, MongoBookRepository, handlers};

use crate::state::AppState;

/// Create books router
pub fn router(state: &AppState) -> Router {
    match &state.mongo {
        Some(mongo) => {
            let repository =
                MongoBookRepository::with_collection(mongo.db.clone(), &state.config.books_collection);
            handlers::router(BookService::new(repository))
        }
        None => handlers::router(BookService::new(InMemoryBookRepository::new())),
    }
}
