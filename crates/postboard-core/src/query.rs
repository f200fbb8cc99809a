// ABOUTME: Sort and search parameters for listing posts.
// ABOUTME: Parses raw query strings into typed orderings and applies them to a collection.

use crate::error::PostError;
use crate::post::Post;

/// Post field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    pub fn parse(raw: &str) -> Result<Self, PostError> {
        match raw {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            _ => Err(PostError::validation("invalid sort field")),
        }
    }

    fn value(self, post: &Post) -> &str {
        match self {
            Self::Title => &post.title,
            Self::Content => &post.content,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self, PostError> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(PostError::validation("invalid direction")),
        }
    }
}

/// A validated ordering for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parse optional `sort` and `direction` parameters.
    ///
    /// Both are validated whenever present; empty strings count as absent.
    /// Returns `None` when no sort field was given, in which case storage order
    /// applies and the direction has no effect.
    pub fn parse(field: Option<&str>, direction: Option<&str>) -> Result<Option<Self>, PostError> {
        let field = non_empty(field).map(SortField::parse).transpose()?;
        let direction = non_empty(direction)
            .map(SortDirection::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(field.map(|field| Self { field, direction }))
    }

    /// Stable case-insensitive sort. Descending is the exact reverse of ascending,
    /// so posts with equal keys also appear in reverse storage order.
    pub fn apply(self, posts: &mut [Post]) {
        posts.sort_by_cached_key(|p| self.field.value(p).to_lowercase());
        if self.direction == SortDirection::Desc {
            posts.reverse();
        }
    }
}

/// Case-insensitive substring filters. A post matches only if it satisfies
/// every term that was supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    title: Option<String>,
    content: Option<String>,
}

impl SearchTerms {
    pub fn new(title: Option<&str>, content: Option<&str>) -> Self {
        Self {
            title: non_empty(title).map(str::to_lowercase),
            content: non_empty(content).map(str::to_lowercase),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .is_none_or(|term| post.title.to_lowercase().contains(term));
        let content_ok = self
            .content
            .as_deref()
            .is_none_or(|term| post.content.to_lowercase().contains(term));
        title_ok && content_ok
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}
