// ABOUTME: PostService implements list, create, update, delete, and search over a PostStore.
// ABOUTME: Every call reloads the collection; mutations are serialized and written back whole.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::PostError;
use crate::post::{Post, PostDraft, next_id};
use crate::query::{SearchTerms, SortOrder};
use crate::store::PostStore;

const CREATE_REQUIRED: &str = "Title and content are required.";
const UPDATE_REQUIRED: &str = "Both 'title' and 'content' are required.";

/// Operations on the post collection.
///
/// Each mutation holds `write_lock` across its read-modify-write so concurrent
/// requests in this process cannot lose each other's updates. Separate
/// processes sharing one backing file still race, and the last write wins.
pub struct PostService {
    store: Arc<dyn PostStore>,
    write_lock: Mutex<()>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// List posts, optionally sorted by `sort_field` in `direction`.
    pub async fn list(
        &self,
        sort_field: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Vec<Post>, PostError> {
        let order = SortOrder::parse(sort_field, direction)?;
        let mut posts = self.store.read_all().await;

        if let Some(order) = order {
            tracing::debug!(?order, count = posts.len(), "sorting posts");
            order.apply(&mut posts);
        }

        Ok(posts)
    }

    pub async fn create(&self, draft: PostDraft) -> Result<Post, PostError> {
        let (title, content) = draft.require(CREATE_REQUIRED)?;

        let _guard = self.write_lock.lock().await;
        let mut posts = self.store.read_all().await;
        let post = Post {
            id: next_id(&posts)?,
            title,
            content,
        };
        posts.push(post.clone());
        self.store.write_all(&posts).await?;

        tracing::info!(id = post.id, "created post");
        Ok(post)
    }

    /// Replace the title and content of post `id`. A missing id is reported
    /// before the draft is validated.
    pub async fn update(&self, id: u64, draft: PostDraft) -> Result<Post, PostError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.store.read_all().await;

        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PostError::NotFound(id))?;
        let (title, content) = draft.require(UPDATE_REQUIRED)?;
        post.title = title;
        post.content = content;
        let updated = post.clone();

        self.store.write_all(&posts).await?;

        tracing::info!(id, "updated post");
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<(), PostError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.store.read_all().await;

        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(PostError::NotFound(id))?;
        posts.remove(index);
        self.store.write_all(&posts).await?;

        tracing::info!(id, "deleted post");
        Ok(())
    }

    /// Posts whose title and content contain every supplied term, ignoring case.
    pub async fn search(
        &self,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Vec<Post>, PostError> {
        let terms = SearchTerms::new(title, content);
        let posts = self.store.read_all().await;

        if terms.is_empty() {
            return Ok(posts);
        }

        tracing::debug!(?terms, "searching posts");
        Ok(posts.into_iter().filter(|p| terms.matches(p)).collect())
    }
}
