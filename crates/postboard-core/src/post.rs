// ABOUTME: Defines the Post record and the draft payload used to create or update one.
// ABOUTME: Drafts carry optional fields so missing and empty inputs are rejected the same way.

use serde::{Deserialize, Serialize};

use crate::error::PostError;

/// A single blog post. The id is assigned by the collection on create and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// Title and content as supplied by a caller, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Return the title and content if both are present and non-empty,
    /// otherwise a validation error carrying `message`.
    pub fn require(self, message: &str) -> Result<(String, String), PostError> {
        match (self.title, self.content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Ok((title, content))
            }
            _ => Err(PostError::validation(message)),
        }
    }
}

/// Next id under the max-plus-one policy; 1 for an empty collection.
/// Fails once the largest id is `u64::MAX`.
pub fn next_id(posts: &[Post]) -> Result<u64, PostError> {
    match posts.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(PostError::IdsExhausted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("Title {}", id),
            content: "Body".to_string(),
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_follows_max_not_len() {
        assert_eq!(next_id(&[post(3), post(9), post(4)]).unwrap(), 10);
    }

    #[test]
    fn next_id_refuses_to_wrap() {
        let err = next_id(&[post(1), post(u64::MAX)]).unwrap_err();
        assert!(matches!(err, PostError::IdsExhausted));
    }

    #[test]
    fn draft_rejects_missing_and_empty_fields() {
        let missing = PostDraft {
            title: Some("Title".to_string()),
            content: None,
        };
        assert!(matches!(
            missing.require("required"),
            Err(PostError::Validation(m)) if m == "required"
        ));

        let empty = PostDraft::new("", "content");
        assert!(empty.require("required").is_err());
    }

    #[test]
    fn draft_accepts_whitespace_content() {
        let (title, content) = PostDraft::new("T", " ").require("required").unwrap();
        assert_eq!(title, "T");
        assert_eq!(content, " ");
    }

    #[test]
    fn post_json_shape() {
        let json = serde_json::to_value(post(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 2, "title": "Title 2", "content": "Body" })
        );
    }
}
