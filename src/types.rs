//! Shared primitive ids, rating scales, and the tag vocabulary.

/// Monotonic book identifier assigned by the store. Never reused within a
/// store lifetime.
pub type BookId = i64;

/// Star rating, 0 through 5. Zero means unrated.
pub type Rating = u8;

/// Content-intensity scale, 1 through 5.
pub type SpiceLevel = u8;

/// Spice level applied when a draft or stored row leaves it unset.
pub const DEFAULT_SPICE_LEVEL: SpiceLevel = 1;

/// Fixed tag vocabulary offered by the collection screens. Records store
/// tags as plain strings; this list is the UI's menu, not a constraint the
/// store enforces.
pub const TAG_OPTIONS: [&str; 4] = ["liked", "dislike", "want to own", "never read again"];
