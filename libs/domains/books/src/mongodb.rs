//! MongoDB implementation of BookRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::{BookError, BookResult};
use crate::models::{Book, BookDocument, CreateBook, UpdateBook, parse_object_id};
use crate::repository::BookRepository;

/// Default collection name for books
pub const DEFAULT_COLLECTION: &str = "books";

/// MongoDB implementation of the BookRepository
pub struct MongoBookRepository {
    collection: Collection<BookDocument>,
}

impl MongoBookRepository {
    /// Create a repository over the `books` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoBookRepository::new(client.database("dev"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<BookDocument>(collection_name);
        Self { collection }
    }

    /// `$set` body for the staged fields of a patch
    fn set_document(changes: &UpdateBook) -> Document {
        let mut set = doc! {};
        if let Some(ref title) = changes.title {
            set.insert("title", title.as_str());
        }
        if let Some(ref author) = changes.author {
            set.insert("author", author.as_str());
        }
        set
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> BookResult<Vec<Book>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<BookDocument> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> BookResult<Book> {
        let oid = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .map(Book::from)
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: CreateBook) -> BookResult<Book> {
        let mut document = BookDocument::from(input);

        let result = self.collection.insert_one(&document).await?;
        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            BookError::Storage(format!(
                "insert returned a non-ObjectId key: {}",
                result.inserted_id
            ))
        })?;
        document.id = Some(oid);

        tracing::info!(book_id = %oid, "Book created");
        Ok(document.into())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: UpdateBook) -> BookResult<Book> {
        let oid = parse_object_id(id)?;
        let filter = doc! { "_id": oid };

        let existing: Book = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| BookError::NotFound(id.to_string()))?
            .into();

        let changes = input.staged_changes(&existing);
        if changes.is_empty() {
            tracing::debug!(book_id = %id, "No changes to apply");
            return Ok(existing);
        }

        let updated = self
            .collection
            .find_one_and_update(filter, doc! { "$set": Self::set_document(&changes) })
            .return_document(ReturnDocument::After)
            .await?
            // Deleted between the read and the write
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        tracing::info!(book_id = %id, "Book updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> BookResult<Book> {
        let oid = parse_object_id(id)?;

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        tracing::info!(book_id = %id, "Book deleted");
        Ok(deleted.into())
    }
}
