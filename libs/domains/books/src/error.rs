use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Invalid book id: {0}")]
    InvalidId(String),

    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type BookResult<T> = Result<T, BookError>;

/// Convert BookError to AppError for standardized error responses
impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::InvalidId(id) => AppError::InvalidId(id),
            BookError::NotFound(id) => AppError::NotFound(format!("Book with id {} not found", id)),
            // Logged in full by AppError, answered with a generic message.
            BookError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for BookError {
    fn from(err: mongodb::error::Error) -> Self {
        BookError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (BookError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (BookError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                BookError::Storage("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message_names_id() {
        match AppError::from(BookError::NotFound("abc".into())) {
            AppError::NotFound(msg) => assert_eq!(msg, "Book with id abc not found"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
