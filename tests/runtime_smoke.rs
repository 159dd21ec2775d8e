use tempfile::TempDir;

use booklog::{
    book::{BookDraft, BookPatch},
    runtime::handle::{StoreConfig, spawn_book_store},
};

fn draft(title: &str) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        description: format!("{title} notes"),
        rating: 4,
        tags: vec!["liked".to_string()],
        category: "Fantasy".to_string(),
        ..BookDraft::default()
    }
}

#[tokio::test]
async fn operations_before_initialize_degrade_gracefully() {
    let handle = spawn_book_store(StoreConfig::default());

    assert!(handle.read_all().await.is_empty());
    assert_eq!(handle.create(draft("Too Early")).await, None);
    assert!(
        !handle
            .update(
                1,
                BookPatch {
                    rating: Some(2),
                    ..BookPatch::default()
                },
            )
            .await
    );
    assert!(!handle.delete(1).await);

    handle.shutdown().await;
}

#[tokio::test]
async fn initialize_is_idempotent_and_safe_concurrently() {
    let handle = spawn_book_store(StoreConfig::default());
    let second = handle.clone();

    // Two independent callers race to initialize; both must succeed.
    let (a, b) = tokio::join!(handle.initialize(), second.initialize());
    assert!(a && b);
    assert!(handle.initialize().await);

    let id = handle.create(draft("After Init")).await.expect("create");
    let books = handle.read_all().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, id);

    handle.shutdown().await;
}

#[tokio::test]
async fn failed_initialize_leaves_operations_degraded() {
    let tmp = TempDir::new().expect("tmp");
    // A directory is not an openable database file.
    let handle = spawn_book_store(StoreConfig {
        path: Some(tmp.path().to_path_buf()),
    });

    assert!(!handle.initialize().await);
    assert!(handle.read_all().await.is_empty());
    assert_eq!(handle.create(draft("Never Lands")).await, None);

    handle.shutdown().await;
}

#[tokio::test]
async fn full_session_round_trip_persists_across_respawn() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("books.db");

    let handle = spawn_book_store(StoreConfig {
        path: Some(path.clone()),
    });
    assert!(handle.initialize().await);

    let kept = handle.create(draft("Kept")).await.expect("create kept");
    let doomed = handle.create(draft("Doomed")).await.expect("create doomed");

    assert!(
        handle
            .update(
                kept,
                BookPatch {
                    rating: Some(5),
                    ..BookPatch::default()
                },
            )
            .await
    );
    assert!(handle.delete(doomed).await);
    assert!(!handle.delete(doomed).await);

    let books = handle.read_all().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].rating, 5);
    handle.shutdown().await;

    // A fresh session over the same file sees the same shelf.
    let handle = spawn_book_store(StoreConfig { path: Some(path) });
    assert!(handle.initialize().await);
    let books = handle.read_all().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Kept");
    assert_eq!(books[0].genres, vec!["Fantasy".to_string()]);
    handle.shutdown().await;
}
