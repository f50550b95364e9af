//! Story data model
//!
//! A `Story` is a prompt/generated-text pair persisted by the external
//! backend. The client never creates, updates, or deletes stories on its
//! own; it only decodes what the API returns.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A generated story as returned by the backend
///
/// Stories are immutable once created: the backend assigns `id` and
/// `created_at` at creation time and this client treats the whole record
/// as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier assigned by the external store
    pub id: i64,
    /// Topic text submitted by the user
    pub prompt: String,
    /// Generated narrative text
    pub story: String,
    /// Creation time assigned by the backend (ISO 8601, no offset)
    pub created_at: NaiveDateTime,
}

impl Story {
    /// Whether the story's prompt or text contains `query`,
    /// case-insensitive.
    ///
    /// An empty query matches everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula::story::Story;
    ///
    /// let story = Story {
    ///     id: 1,
    ///     prompt: "Cats".to_string(),
    ///     story: "Once upon a time...".to_string(),
    ///     created_at: Default::default(),
    /// };
    /// assert!(story.matches("cat"));
    /// assert!(story.matches("TIME"));
    /// assert!(!story.matches("dogs"));
    /// ```
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.prompt.to_lowercase().contains(&needle)
            || self.story.to_lowercase().contains(&needle)
    }
}

/// Filter a story collection by a free-text query
///
/// Returns the subsequence of stories whose prompt or text contains the
/// query (case-insensitive substring match), preserving the input order.
/// An empty or whitespace-only query yields the full collection.
pub fn filter_stories<'a>(stories: &'a [Story], query: &str) -> Vec<&'a Story> {
    let query = query.trim();
    stories.iter().filter(|s| s.matches(query)).collect()
}
