// ABOUTME: Post API handlers for listing, creating, updating, deleting, and searching posts.
// ABOUTME: Translates query strings, paths, and JSON bodies into PostService calls.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use postboard_core::{Post, PostDraft, PostError};
use serde::Deserialize;

use crate::api::ApiError;
use crate::app_state::SharedState;

/// Raw query-string pairs in request order. Repeated keys resolve to their
/// first value, so duplicates never fail a request.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A query string that cannot be decoded is treated as empty.
fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> QueryPairs {
    match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!("unusable query string: {}", rejection);
            QueryPairs::default()
        }
    }
}

/// A body that failed to parse is treated as a draft with no fields, so it is
/// reported through the same validation path as a missing title or content.
fn draft_from(payload: Result<Json<PostDraft>, JsonRejection>) -> PostDraft {
    match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            tracing::debug!("unusable post body: {}", rejection);
            PostDraft::default()
        }
    }
}

/// A path segment that is not an integer cannot name a post.
fn post_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("unusable post id: {}", rejection);
        // The id is not part of the rendered message; 0 is never assigned.
        ApiError(PostError::NotFound(0))
    })
}

/// GET /api/posts - List posts, optionally sorted.
pub async fn list_posts(
    State(state): State<SharedState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let params = query_pairs(query);
    let posts = state
        .posts
        .list(params.first("sort"), params.first("direction"))
        .await?;
    Ok(Json(posts))
}

/// POST /api/posts - Create a post.
pub async fn create_post(
    State(state): State<SharedState>,
    payload: Result<Json<PostDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state.posts.create(draft_from(payload)).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/{id} - Replace a post's title and content.
pub async fn update_post(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<PostDraft>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let id = post_id(path)?;
    let post = state.posts.update(id, draft_from(payload)).await?;
    Ok(Json(post))
}

/// DELETE /api/posts/{id} - Delete a post.
pub async fn delete_post(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = post_id(path)?;
    state.posts.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": format!("Post with id {} has been deleted successfully.", id)
    })))
}

/// GET /api/posts/search - Filter posts by title and content substrings.
pub async fn search_posts(
    State(state): State<SharedState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let params = query_pairs(query);
    let posts = state
        .posts
        .search(params.first("title"), params.first("content"))
        .await?;
    Ok(Json(posts))
}
