//! Typo-tolerant token matching for the free-text search.
//!
//! A term matches a field when the field contains it as a case-insensitive
//! substring, or when some whitespace/punctuation-delimited token of the
//! field is within the normalized edit-distance threshold. The tuning keeps
//! single-character typos matching while unrelated words score out.

use crate::book::BookRecord;

/// Highest normalized edit distance still considered a match.
pub const SCORE_THRESHOLD: f64 = 0.35;

/// Terms shorter than this only match as exact substrings.
pub const MIN_MATCH_LEN: usize = 2;

/// Matches `term` against the searchable fields of `book`: title, author,
/// description, category, and tags.
pub fn record_matches(term: &str, book: &BookRecord) -> bool {
    field_matches(term, &book.title)
        || field_matches(term, &book.author)
        || field_matches(term, &book.description)
        || field_matches(term, &book.category)
        || book.tags.iter().any(|tag| field_matches(term, tag))
}

/// Matches a term against one field.
pub fn field_matches(term: &str, field: &str) -> bool {
    if term.is_empty() || field.is_empty() {
        return false;
    }
    let term = term.to_lowercase();
    let field = field.to_lowercase();
    if field.contains(&term) {
        return true;
    }
    if term.chars().count() < MIN_MATCH_LEN {
        return false;
    }
    field
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .any(|token| score(&term, token) <= SCORE_THRESHOLD)
}

/// Normalized edit distance between the query term and one token.
/// 0.0 is identical, 1.0 shares nothing.
fn score(term: &str, token: &str) -> f64 {
    let a: Vec<char> = term.chars().collect();
    let b: Vec<char> = token.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    levenshtein(&a, &b) as f64 / longest as f64
}

/// Two-row Levenshtein distance over char slices.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
