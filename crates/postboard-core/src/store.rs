// ABOUTME: Storage abstraction for the post collection plus an in-memory implementation.
// ABOUTME: Backends read and write the whole collection as one unit.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::post::Post;

/// Loads and persists the full, ordered post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load every post in storage order. An absent or unreadable backing
    /// resource yields an empty collection rather than an error.
    async fn read_all(&self) -> Vec<Post>;

    /// Replace the persisted collection. Readers never observe a partial write.
    async fn write_all(&self, posts: &[Post]) -> Result<(), StorageError>;
}

/// A store that keeps the collection in memory. Used by tests and as a
/// scratch backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn read_all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), StorageError> {
        *self.posts.write().await = posts.to_vec();
        Ok(())
    }
}
