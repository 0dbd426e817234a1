//! Custom extractors for Axum handlers.
//!
//! Extractors here reject with the crate's [`ErrorResponse`](crate::errors::ErrorResponse)
//! body instead of axum's plain-text rejections.

pub mod json_body;

pub use json_body::JsonBody;
