use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody,
    errors::handlers::method_not_allowed,
    errors::responses::{
        BadRequestInvalidIdResponse, BadRequestJsonResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BookResult;
use crate::models::{Book, CreateBook, UpdateBook};
use crate::repository::BookRepository;
use crate::service::BookService;

/// OpenAPI documentation for the Books API
#[derive(OpenApi)]
#[openapi(
    paths(list_books, create_book, get_book, update_book, delete_book),
    components(
        schemas(Book, CreateBook, UpdateBook),
        responses(
            NotFoundResponse,
            BadRequestInvalidIdResponse,
            BadRequestJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Books", description = "Book management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the books router; mount it under `/books`
pub fn router<R: BookRepository + 'static>(service: BookService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_books).post(create_book))
        .route(
            "/{id}",
            get(get_book).patch(update_book).delete(delete_book),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(shared_service)
}

/// List all books
#[utoipa::path(
    get,
    path = "",
    tag = "Books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_books<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
) -> BookResult<Json<Vec<Book>>> {
    let books = service.list_books().await?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "",
    tag = "Books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_book<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    JsonBody(input): JsonBody<CreateBook>,
) -> BookResult<impl IntoResponse> {
    let book = service.create_book(input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_book<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    Path(id): Path<String>,
) -> BookResult<Json<Book>> {
    let book = service.get_book(&id).await?;
    Ok(Json(book))
}

/// Merge fields into a book
///
/// Only fields that are present, non-empty and different are written.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book after the merge", body = Book),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_book<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateBook>,
) -> BookResult<Json<Book>> {
    let book = service.update_book(&id, input).await?;
    Ok(Json(book))
}

/// Delete a book, returning its last state
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Deleted book", body = Book),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_book<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    Path(id): Path<String>,
) -> BookResult<Json<Book>> {
    let book = service.delete_book(&id).await?;
    Ok(Json(book))
}
