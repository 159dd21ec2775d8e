//! Book domain record, draft, and patch types.

use serde::{Deserialize, Serialize};

use crate::types::{BookId, DEFAULT_SPICE_LEVEL, Rating, SpiceLevel};

/// Fully materialized book entry as returned by the store.
///
/// Optional text columns decode to empty strings, and an empty `photo` means
/// "no image". `tags` and `genres` always arrive as decoded sequences; raw
/// serialized text never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Stable store-assigned identifier.
    pub id: BookId,
    /// Cover photo URI, empty when no image was attached.
    pub photo: String,
    /// Free-text description.
    pub description: String,
    /// Book title. Empty on records written before the column existed.
    pub title: String,
    /// Author name. Empty on records written before the column existed.
    pub author: String,
    /// Star rating, 0 meaning unrated.
    pub rating: Rating,
    /// Applied tags, in the order the user picked them.
    pub tags: Vec<String>,
    /// Legacy single classification, kept for older records.
    pub category: String,
    /// Genre labels. Falls back to `[category]` when the stored value is
    /// empty and a category is present.
    pub genres: Vec<String>,
    /// Content-intensity scale, 1 through 5.
    pub spicy_level: SpiceLevel,
}

/// Insert payload used to create a new [`BookRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Cover photo URI, empty for none.
    pub photo: String,
    /// Free-text description.
    pub description: String,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Star rating, 0 meaning unrated.
    pub rating: Rating,
    /// Applied tags.
    pub tags: Vec<String>,
    /// Legacy single classification.
    pub category: String,
    /// Genre labels. An empty list is stored as `[category]` when a category
    /// is present.
    pub genres: Vec<String>,
    /// Content-intensity scale.
    pub spicy_level: SpiceLevel,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            photo: String::new(),
            description: String::new(),
            title: String::new(),
            author: String::new(),
            rating: 0,
            tags: Vec::new(),
            category: String::new(),
            genres: Vec::new(),
            spicy_level: DEFAULT_SPICE_LEVEL,
        }
    }
}

/// Sparse patch where each `Some` field overwrites the stored value and
/// every `None` field keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    /// Optional replacement for the photo URI.
    pub photo: Option<String>,
    /// Optional replacement for the description.
    pub description: Option<String>,
    /// Optional replacement for the title.
    pub title: Option<String>,
    /// Optional replacement for the author.
    pub author: Option<String>,
    /// Optional replacement for the rating.
    pub rating: Option<Rating>,
    /// Optional replacement for the tag list.
    pub tags: Option<Vec<String>>,
    /// Optional replacement for the legacy category.
    pub category: Option<String>,
    /// Optional replacement for the genre list.
    pub genres: Option<Vec<String>>,
    /// Optional replacement for the spice level.
    pub spicy_level: Option<SpiceLevel>,
}

impl BookPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this patch in place to `rec`, keeping prior values for every
    /// absent field.
    pub fn apply_to(&self, rec: &mut BookRecord) {
        if let Some(v) = &self.photo {
            rec.photo = v.clone();
        }
        if let Some(v) = &self.description {
            rec.description = v.clone();
        }
        if let Some(v) = &self.title {
            rec.title = v.clone();
        }
        if let Some(v) = &self.author {
            rec.author = v.clone();
        }
        if let Some(v) = self.rating {
            rec.rating = v;
        }
        if let Some(v) = &self.tags {
            rec.tags = v.clone();
        }
        if let Some(v) = &self.category {
            rec.category = v.clone();
        }
        if let Some(v) = &self.genres {
            rec.genres = v.clone();
        }
        if let Some(v) = self.spicy_level {
            rec.spicy_level = v;
        }
    }
}
