use booklog::{
    book::BookRecord,
    query::{filter::BookFilter, shelf},
};

fn record(id: i64, title: &str, description: &str) -> BookRecord {
    BookRecord {
        id,
        photo: String::new(),
        description: description.to_string(),
        title: title.to_string(),
        author: String::new(),
        rating: 0,
        tags: Vec::new(),
        category: String::new(),
        genres: Vec::new(),
        spicy_level: 1,
    }
}

fn tagged(id: i64, tags: &[&str]) -> BookRecord {
    let mut rec = record(id, "Tagged", "tagged record");
    rec.tags = tags.iter().map(|t| t.to_string()).collect();
    rec
}

#[test]
fn tag_filter_requires_every_selected_tag() {
    let books = vec![
        tagged(1, &["liked"]),
        tagged(2, &["liked", "dislike"]),
        tagged(3, &[]),
    ];
    let filter = BookFilter {
        tags: vec!["liked".to_string(), "dislike".to_string()],
        ..BookFilter::default()
    };
    let hits = filter.apply(&books);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn search_composes_with_rating_filter() {
    let mut keep = record(1, "Dragon's Keep", "Dragon's Keep");
    keep.rating = 5;
    let mut tales = record(2, "Dragon Tales", "Dragon Tales");
    tales.rating = 3;

    let filter = BookFilter {
        search: "dragon".to_string(),
        rating: Some(5),
        ..BookFilter::default()
    };
    let hits = filter.apply(&[keep, tales]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn fuzzy_search_tolerates_single_typos() {
    let books = vec![record(1, "Dragon Tales", "a wyrm anthology")];

    let typo = BookFilter {
        search: "dragn".to_string(),
        ..BookFilter::default()
    };
    assert_eq!(typo.apply(&books).len(), 1);

    let unrelated = BookFilter {
        search: "zebra".to_string(),
        ..BookFilter::default()
    };
    assert!(unrelated.apply(&books).is_empty());
}

#[test]
fn search_scans_author_category_and_tags() {
    let mut by_author = record(1, "The Dispossessed", "");
    by_author.author = "Ursula K. Le Guin".to_string();
    let mut by_category = record(2, "Untitled", "");
    by_category.category = "Romance".to_string();
    let mut by_tag = record(3, "Untitled", "");
    by_tag.tags = vec!["want to own".to_string()];
    let books = vec![by_author, by_category, by_tag];

    let hit = |term: &str| {
        BookFilter {
            search: term.to_string(),
            ..BookFilter::default()
        }
        .apply(&books)
    };

    assert_eq!(hit("ursula")[0].id, 1);
    assert_eq!(hit("romance")[0].id, 2);
    assert_eq!(hit("own")[0].id, 3);
}

#[test]
fn short_terms_only_match_as_substrings() {
    let books = vec![record(1, "Dune", "sand")];
    let substring = BookFilter {
        search: "d".to_string(),
        ..BookFilter::default()
    };
    assert_eq!(substring.apply(&books).len(), 1);

    let miss = BookFilter {
        search: "q".to_string(),
        ..BookFilter::default()
    };
    assert!(miss.apply(&books).is_empty());
}

#[test]
fn spice_filter_is_exact() {
    let mut mild = record(1, "Mild", "");
    mild.spicy_level = 1;
    let mut hot = record(2, "Hot", "");
    hot.spicy_level = 5;

    let filter = BookFilter {
        spicy_level: Some(5),
        ..BookFilter::default()
    };
    let hits = filter.apply(&[mild, hot]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn empty_filter_returns_everything_in_order() {
    let books = vec![
        record(1, "First", ""),
        record(2, "Second", ""),
        record(3, "Third", ""),
    ];
    let filter = BookFilter::default();
    assert!(filter.is_empty());
    let all = filter.apply(&books);
    assert_eq!(all.len(), 3);
    assert_eq!(
        all.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn multi_genre_records_appear_in_every_bucket() {
    let mut both = record(1, "Crossover", "");
    both.genres = vec!["Fiction".to_string(), "Sci-Fi".to_string()];
    let mut single = record(2, "Straight", "");
    single.genres = vec!["Sci-Fi".to_string()];
    let bucketless = record(3, "Unshelved", "");

    let grouped = shelf::group_by_genre(&[both, single, bucketless]);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0, "Fiction");
    assert_eq!(grouped[1].0, "Sci-Fi");
    assert_eq!(
        grouped[0].1.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![1]
    );
    assert_eq!(
        grouped[1].1.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn shelf_stats_aggregate_ratings_and_tags() {
    let mut a = record(1, "A", "");
    a.rating = 4;
    a.tags = vec!["liked".to_string()];
    let mut b = record(2, "B", "");
    b.rating = 5;
    b.tags = vec!["liked".to_string(), "dislike".to_string()];
    let unrated = record(3, "C", "");

    let stats = shelf::shelf_stats(&[a, b, unrated]);
    assert_eq!(stats.total_books, 3);
    assert_eq!(stats.avg_rating, Some(4.5));
    assert_eq!(stats.top_tag.as_deref(), Some("liked"));
}

#[test]
fn shelf_stats_on_empty_shelf() {
    let stats = shelf::shelf_stats(&[]);
    assert_eq!(stats.total_books, 0);
    assert_eq!(stats.avg_rating, None);
    assert_eq!(stats.top_tag, None);
}
