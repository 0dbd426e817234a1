//! Book Service - business logic layer
//!
//! Books carry no rules beyond what the repository enforces, so every
//! operation delegates straight through.

use std::sync::Arc;
use tracing::instrument;

use crate::error::BookResult;
use crate::models::{Book, CreateBook, UpdateBook};
use crate::repository::BookRepository;

pub struct BookService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> Clone for BookService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: BookRepository> BookService<R> {
    /// Create a new BookService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_books(&self) -> BookResult<Vec<Book>> {
        self.repository.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_book(&self, id: &str) -> BookResult<Book> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn create_book(&self, input: CreateBook) -> BookResult<Book> {
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_book(&self, id: &str, input: UpdateBook) -> BookResult<Book> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_book(&self, id: &str) -> BookResult<Book> {
        self.repository.delete_by_id(id).await
    }
}
