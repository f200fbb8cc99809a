// ABOUTME: JSON file backend for the post collection with atomic whole-file rewrites.
// ABOUTME: Reads leniently (missing or malformed files are empty) and writes via temp file and rename.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use postboard_core::{Post, PostStore, StorageError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// Errors that can occur while reading or writing the posts file.
#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsonFileError> for StorageError {
    fn from(err: JsonFileError) -> Self {
        StorageError::new(err)
    }
}

/// A post collection persisted as a top-level JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, distinguishing a missing file (`Ok(None)`) from
    /// unreadable or malformed content.
    pub async fn load(&self) -> Result<Option<Vec<Post>>, JsonFileError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let posts: Vec<Post> = serde_json::from_slice(&bytes)?;
        Ok(Some(posts))
    }

    /// Write the collection with atomic write (write to .tmp, fsync, rename).
    /// Creates the parent directory if it does not exist.
    pub async fn save(&self, posts: &[Post]) -> Result<(), JsonFileError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let json = to_pretty_json(posts)?;
        let tmp_path = self.tmp_path();

        let result = self.replace_with(&tmp_path, &json).await;
        if result.is_err()
            && let Err(e) = fs::remove_file(&tmp_path).await
            && e.kind() != ErrorKind::NotFound
        {
            tracing::warn!(path = %tmp_path.display(), "failed to remove temp file: {}", e);
        }
        result
    }

    async fn replace_with(&self, tmp_path: &Path, json: &[u8]) -> Result<(), JsonFileError> {
        let mut file = File::create(tmp_path).await?;
        file.write_all(json).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(tmp_path, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("posts.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Four-space indented JSON, matching the layout of hand-maintained posts files.
fn to_pretty_json(posts: &[Post]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    posts.serialize(&mut ser)?;
    Ok(buf)
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn read_all(&self) -> Vec<Post> {
        match self.load().await {
            Ok(Some(posts)) => posts,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "treating unreadable posts file as empty: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), StorageError> {
        self.save(posts).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), "failed to write posts file: {}", e);
            StorageError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_posts() -> Vec<Post> {
        vec![
            Post {
                id: 1,
                title: "First post".to_string(),
                content: "This is the first post.".to_string(),
            },
            Post {
                id: 3,
                title: "Third".to_string(),
                content: "Ünïcode survives".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("posts.json"));

        assert!(store.load().await.unwrap().is_none());
        assert!(store.read_all().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, r#"[{"id": 1, "title": "trunc"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.is_err());
        assert!(store.read_all().await.is_empty());
    }

    #[tokio::test]
    async fn non_array_document_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, r#"{"posts": []}"#).unwrap();

        assert!(JsonFileStore::new(&path).read_all().await.is_empty());
    }

    #[tokio::test]
    async fn write_then_read_round_trip_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        let store = JsonFileStore::new(&path);

        store.write_all(&sample_posts()).await.unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let loaded = store.read_all().await;
        assert_eq!(loaded, sample_posts());

        store.write_all(&loaded).await.unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.read_all().await, sample_posts());
    }

    #[tokio::test]
    async fn file_holds_top_level_array_with_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        let store = JsonFileStore::new(&path);

        store.write_all(&sample_posts()[..1]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n    {\n        \"id\": 1,"));

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "id": 1, "title": "First post", "content": "This is the first post." }
            ])
        );
    }

    #[tokio::test]
    async fn save_creates_parent_and_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("posts.json");
        let store = JsonFileStore::new(&path);

        store.write_all(&sample_posts()).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_file_name("posts.json.tmp").exists());
    }

    #[tokio::test]
    async fn write_to_unwritable_location_is_storage_error() {
        let dir = TempDir::new().unwrap();
        // A regular file where a directory is expected makes create_dir_all fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = JsonFileStore::new(blocker.join("posts.json"));

        let result = store.write_all(&sample_posts()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn failed_rename_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the final rename fail.
        let path = dir.path().join("posts.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(store.write_all(&sample_posts()).await.is_err());
        assert!(!dir.path().join("posts.json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[tokio::test]
    async fn empty_collection_is_written_as_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        let store = JsonFileStore::new(&path);

        store.write_all(&[]).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert_eq!(store.load().await.unwrap(), Some(Vec::new()));
    }
}
