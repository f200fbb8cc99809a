// ABOUTME: API module containing the HTTP handler functions for the postboard REST API.
// ABOUTME: Split into post handlers and the error-to-response mapping.

pub mod error;
pub mod posts;

pub use error::ApiError;
