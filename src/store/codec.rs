//! Text codec for the serialized list columns.
//!
//! `tags` and `genres` live in TEXT cells as JSON arrays. Encoding is strict,
//! decoding is lenient: a NULL or malformed cell becomes an empty list so one
//! bad row cannot abort a full read.

use tracing::warn;

use super::StoreResult;

/// Encodes a list for storage in a TEXT cell.
pub fn encode_list(items: &[String]) -> StoreResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Decodes a stored list cell. NULL and malformed text both decode to an
/// empty list; malformed text is logged with the offending column name.
pub fn decode_list(column: &str, cell: Option<&str>) -> Vec<String> {
    let Some(raw) = cell else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(column, %err, "malformed list cell, substituting empty list");
            Vec::new()
        }
    }
}

/// Applies the genres fallback rule: a non-empty genre list is authoritative,
/// an empty one is derived from the legacy `category` value when present.
pub fn effective_genres(genres: Vec<String>, category: &str) -> Vec<String> {
    if !genres.is_empty() {
        genres
    } else if !category.is_empty() {
        vec![category.to_string()]
    } else {
        Vec::new()
    }
}
