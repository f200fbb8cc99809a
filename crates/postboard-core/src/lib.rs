// ABOUTME: Core library for postboard, containing the post model and collection operations.
// ABOUTME: Defines the store abstraction that persistence backends implement and the service over it.

pub mod error;
pub mod post;
pub mod query;
pub mod service;
pub mod store;

pub use error::{PostError, StorageError};
pub use post::{Post, PostDraft};
pub use query::{SearchTerms, SortDirection, SortField, SortOrder};
pub use service::PostService;
pub use store::{MemoryStore, PostStore};
