//! Command-channel handle that serializes all store access onto one writer.
//!
//! Persistence failures never cross this boundary as errors the caller must
//! catch: each operation logs the failure and degrades to an empty result or
//! a no-op, so a broken local database cannot take the caller down with it.
//! Callers branch on the returned value instead.

use std::path::PathBuf;

use tokio::sync::{mpsc, oneshot};
use tracing::{error, info};

use crate::{
    book::{BookDraft, BookPatch, BookRecord},
    store::sqlite::SqliteBookStore,
    types::BookId,
};

/// Where the backing database lives.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Database file path. `None` selects a transient in-memory database,
    /// which is mainly useful in tests.
    pub path: Option<PathBuf>,
}

enum Command {
    Initialize {
        resp: oneshot::Sender<bool>,
    },
    Create {
        draft: BookDraft,
        resp: oneshot::Sender<Option<BookId>>,
    },
    ReadAll {
        resp: oneshot::Sender<Vec<BookRecord>>,
    },
    Update {
        id: BookId,
        patch: BookPatch,
        resp: oneshot::Sender<bool>,
    },
    Delete {
        id: BookId,
        resp: oneshot::Sender<bool>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Cloneable async handle to the single-writer store task.
#[derive(Clone)]
pub struct BookStoreHandle {
    cmd_tx: mpsc::Sender<Command>,
}

/// Spawns the writer task and returns a handle to it.
///
/// The store starts uninitialized; call [`BookStoreHandle::initialize`]
/// before issuing reads or writes. All operations, initialization included,
/// serialize through one command channel, so any number of callers may
/// initialize concurrently without racing.
pub fn spawn_book_store(config: StoreConfig) -> BookStoreHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(64);

    tokio::task::spawn_blocking(move || {
        let mut store: Option<SqliteBookStore> = None;
        while let Some(cmd) = cmd_rx.blocking_recv() {
            if handle_command(cmd, &config, &mut store) {
                break;
            }
        }
    });

    BookStoreHandle { cmd_tx }
}

impl BookStoreHandle {
    /// Opens the database and brings the schema current. Idempotent: once
    /// the store is initialized, later calls return `true` without touching
    /// it. A failure is logged and leaves the store uninitialized so a later
    /// call can retry.
    pub async fn initialize(&self) -> bool {
        let (tx, rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(Command::Initialize { resp: tx })
            .await
            .is_err()
        {
            error!("store task is gone, initialize dropped");
            return false;
        }
        rx.await.unwrap_or(false)
    }

    /// Stores a new record, returning its assigned id. `None` means the
    /// store was uninitialized or the write failed; either way the failure
    /// was logged and nothing was stored.
    pub async fn create(&self, draft: BookDraft) -> Option<BookId> {
        let (tx, rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(Command::Create { draft, resp: tx })
            .await
            .is_err()
        {
            error!("store task is gone, create dropped");
            return None;
        }
        rx.await.unwrap_or(None)
    }

    /// Returns every stored record, list fields decoded. Empty when the
    /// store is uninitialized or the read failed.
    pub async fn read_all(&self) -> Vec<BookRecord> {
        let (tx, rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(Command::ReadAll { resp: tx })
            .await
            .is_err()
        {
            error!("store task is gone, read_all dropped");
            return Vec::new();
        }
        rx.await.unwrap_or_default()
    }

    /// Applies a sparse patch to the record with `id`. `false` means nothing
    /// changed: the store was uninitialized, the id was absent, or the write
    /// failed (logged).
    pub async fn update(&self, id: BookId, patch: BookPatch) -> bool {
        let (tx, rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(Command::Update { id, patch, resp: tx })
            .await
            .is_err()
        {
            error!("store task is gone, update dropped");
            return false;
        }
        rx.await.unwrap_or(false)
    }

    /// Removes the record with `id`. `false` means nothing was removed;
    /// deleting an id that was never stored is not an error.
    pub async fn delete(&self, id: BookId) -> bool {
        let (tx, rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(Command::Delete { id, resp: tx })
            .await
            .is_err()
        {
            error!("store task is gone, delete dropped");
            return false;
        }
        rx.await.unwrap_or(false)
    }

    /// Stops the writer task after the commands already queued have drained.
    /// The UI contract never needs this; it exists for tests and orderly
    /// process exit.
    pub async fn shutdown(&self) {
        let (tx, rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .is_err()
        {
            return;
        }
        let _ = rx.await;
    }
}

fn handle_command(
    cmd: Command,
    config: &StoreConfig,
    store: &mut Option<SqliteBookStore>,
) -> bool {
    match cmd {
        Command::Initialize { resp } => {
            if store.is_none() {
                let opened = match &config.path {
                    Some(path) => SqliteBookStore::open(path),
                    None => SqliteBookStore::open_in_memory(),
                };
                match opened {
                    Ok(s) => {
                        info!("book store initialized");
                        *store = Some(s);
                    }
                    Err(err) => error!(?err, "store initialization failed"),
                }
            }
            let _ = resp.send(store.is_some());
        }
        Command::Create { draft, resp } => {
            let out = match store.as_ref() {
                Some(s) => match s.insert(draft) {
                    Ok(id) => Some(id),
                    Err(err) => {
                        error!(?err, "create failed");
                        None
                    }
                },
                None => {
                    error!("create before initialize, draft dropped");
                    None
                }
            };
            let _ = resp.send(out);
        }
        Command::ReadAll { resp } => {
            let out = match store.as_ref() {
                Some(s) => match s.read_all() {
                    Ok(records) => records,
                    Err(err) => {
                        error!(?err, "read_all failed");
                        Vec::new()
                    }
                },
                None => {
                    error!("read_all before initialize, returning empty set");
                    Vec::new()
                }
            };
            let _ = resp.send(out);
        }
        Command::Update { id, patch, resp } => {
            let out = match store.as_ref() {
                Some(s) => match s.update(id, patch) {
                    Ok(changed) => changed,
                    Err(err) => {
                        error!(?err, id, "update failed");
                        false
                    }
                },
                None => {
                    error!(id, "update before initialize, patch dropped");
                    false
                }
            };
            let _ = resp.send(out);
        }
        Command::Delete { id, resp } => {
            let out = match store.as_ref() {
                Some(s) => match s.delete(id) {
                    Ok(removed) => removed,
                    Err(err) => {
                        error!(?err, id, "delete failed");
                        false
                    }
                },
                None => {
                    error!(id, "delete before initialize, ignored");
                    false
                }
            };
            let _ = resp.send(out);
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}
