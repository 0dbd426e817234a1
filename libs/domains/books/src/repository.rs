use async_trait::async_trait;

use crate::error::BookResult;
use crate::models::{Book, CreateBook, UpdateBook};

/// Repository trait for Book persistence
///
/// Ids are the hex strings clients send; implementations reject ones that
/// do not parse with `BookError::InvalidId` and report missing records with
/// `BookError::NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List every book
    async fn list_all(&self) -> BookResult<Vec<Book>>;

    /// Get a book by ID
    async fn get_by_id(&self, id: &str) -> BookResult<Book>;

    /// Insert a new book; the store assigns the id
    async fn create(&self, input: CreateBook) -> BookResult<Book>;

    /// Merge the non-empty, changed fields of `input` into a stored book
    ///
    /// Returns the stored record untouched when nothing would change.
    async fn update(&self, id: &str, input: UpdateBook) -> BookResult<Book>;

    /// Delete a book, returning its last state
    async fn delete_by_id(&self, id: &str) -> BookResult<Book>;
}
