//! Shelf views derived from the full record set: genre buckets and stats.

use hashbrown::HashMap;

use crate::book::BookRecord;

/// Partitions records into genre buckets, keyed in first-seen order.
///
/// A record with several genres appears in each of its buckets; a record
/// with no effective genre appears in none. Works equally on the full set
/// and on a filtered subset.
pub fn group_by_genre(books: &[BookRecord]) -> Vec<(String, Vec<BookRecord>)> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<BookRecord>> = HashMap::new();
    for book in books {
        for genre in &book.genres {
            if !buckets.contains_key(genre) {
                order.push(genre.clone());
            }
            buckets.entry(genre.clone()).or_default().push(book.clone());
        }
    }
    order
        .into_iter()
        .map(|genre| {
            let items = buckets.remove(&genre).unwrap_or_default();
            (genre, items)
        })
        .collect()
}

/// Aggregate figures shown on the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfStats {
    /// Total number of records.
    pub total_books: usize,
    /// Mean rating across rated records, `None` when nothing is rated.
    pub avg_rating: Option<f64>,
    /// Most frequently applied tag. First-seen wins ties; `None` when no
    /// record carries a tag.
    pub top_tag: Option<String>,
}

/// Computes [`ShelfStats`] over the full record set.
pub fn shelf_stats(books: &[BookRecord]) -> ShelfStats {
    let mut rated = 0usize;
    let mut rating_sum = 0u64;
    for book in books {
        if book.rating > 0 {
            rated += 1;
            rating_sum += u64::from(book.rating);
        }
    }
    let avg_rating = (rated > 0).then(|| rating_sum as f64 / rated as f64);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();
    for book in books {
        for tag in &book.tags {
            if !counts.contains_key(tag.as_str()) {
                seen_order.push(tag);
            }
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    let mut top_tag: Option<&str> = None;
    let mut top_count = 0usize;
    for tag in seen_order {
        let count = counts[tag];
        if count > top_count {
            top_count = count;
            top_tag = Some(tag);
        }
    }

    ShelfStats {
        total_books: books.len(),
        avg_rating,
        top_tag: top_tag.map(str::to_string),
    }
}
