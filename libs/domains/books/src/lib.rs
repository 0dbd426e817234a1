//! Books Domain
//!
//! CRUD over a single `Book` resource with partial-merge updates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Delegation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, stored document, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_books::{handlers, mongodb::MongoBookRepository, service::BookService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoBookRepository::new(client.database("dev"));
//! let service = BookService::new(repository);
//!
//! let router = axum::Router::new().nest("/books", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{BookError, BookResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryBookRepository;
pub use models::{Book, BookDocument, CreateBook, UpdateBook};
pub use crate::mongodb::MongoBookRepository;
pub use repository::BookRepository;
pub use service::BookService;
