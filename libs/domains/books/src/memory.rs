//! In-process implementation of BookRepository
//!
//! Backs local runs and handler tests without a database. The store is an
//! ordinary value owned by whoever constructs it; there is no shared global.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{BookError, BookResult};
use crate::models::{Book, CreateBook, UpdateBook, parse_object_id};
use crate::repository::BookRepository;

/// Books kept in an ordered map keyed by ObjectId
///
/// ObjectIds generated in one process increase monotonically, so iteration
/// order is creation order.
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<BTreeMap<ObjectId, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> BookResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> BookResult<Book> {
        let oid = parse_object_id(id)?;

        self.books
            .read()
            .await
            .get(&oid)
            .cloned()
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: CreateBook) -> BookResult<Book> {
        let oid = ObjectId::new();
        let book = Book {
            id: oid.to_hex(),
            title: input.title,
            author: input.author,
        };

        self.books.write().await.insert(oid, book.clone());

        tracing::info!(book_id = %oid, "Book created");
        Ok(book)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: UpdateBook) -> BookResult<Book> {
        let oid = parse_object_id(id)?;

        let mut books = self.books.write().await;
        let book = books
            .get_mut(&oid)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        let changes = input.staged_changes(book);
        if !changes.is_empty() {
            book.apply_update(changes);
            tracing::info!(book_id = %id, "Book updated");
        }

        Ok(book.clone())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> BookResult<Book> {
        let oid = parse_object_id(id)?;

        let deleted = self
            .books
            .write()
            .await
            .remove(&oid)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        tracing::info!(book_id = %id, "Book deleted");
        Ok(deleted)
    }
}
