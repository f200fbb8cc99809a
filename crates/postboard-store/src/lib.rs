// ABOUTME: Persistence layer for postboard.
// ABOUTME: Stores the whole post collection as one JSON array in a flat file.

pub mod json_file;

pub use json_file::{JsonFileError, JsonFileStore};
