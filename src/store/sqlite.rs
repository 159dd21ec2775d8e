//! SQLite-backed book store: schema bootstrap, additive migrations, CRUD.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::info;

use crate::{
    book::{BookDraft, BookPatch, BookRecord},
    types::{BookId, DEFAULT_SPICE_LEVEL},
};

use super::{StoreResult, codec};

/// Optional columns appended after the baseline schema, with the statement
/// used to add each. Order matters: it is the order the columns shipped in.
const OPTIONAL_COLUMNS: [(&str, &str); 4] = [
    ("genres", "ALTER TABLE books ADD COLUMN genres TEXT"),
    (
        "spicyLevel",
        "ALTER TABLE books ADD COLUMN spicyLevel INTEGER DEFAULT 1",
    ),
    ("author", "ALTER TABLE books ADD COLUMN author TEXT"),
    ("title", "ALTER TABLE books ADD COLUMN title TEXT"),
];

const SELECT_COLUMNS: &str =
    "id, photo, description, rating, tags, category, genres, spicyLevel, author, title";

/// Embedded single-table store for book records.
///
/// Opening the store guarantees the schema exists and is current; every
/// database written by an older column set is migrated additively on open.
pub struct SqliteBookStore {
    conn: Connection,
}

impl SqliteBookStore {
    /// Opens or creates the store at `path`, creating parent directories as
    /// needed. Safe to call on the same path any number of times.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens a transient in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Brings an existing table up to the current column set. Additive only:
    /// each missing optional column is appended with its default, and a
    /// freshly added `genres` column is backfilled from the legacy `category`
    /// value so older rows keep their classification.
    fn migrate(&self) -> StoreResult<()> {
        let present = self.table_columns()?;
        for (name, add_sql) in OPTIONAL_COLUMNS {
            if present.iter().any(|c| c == name) {
                continue;
            }
            self.conn.execute(add_sql, [])?;
            info!(column = name, "added books column");
            if name == "genres" {
                let backfilled = self.conn.execute(
                    "UPDATE books SET genres = json_array(category)
                     WHERE category IS NOT NULL AND category <> ''",
                    [],
                )?;
                info!(rows = backfilled, "backfilled genres from category");
            }
        }
        Ok(())
    }

    fn table_columns(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare("PRAGMA table_info(books)")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Inserts a new record and returns its assigned id.
    ///
    /// An empty draft genre list is stored as `[category]` when a category is
    /// present, so the stored row matches what readers will report.
    pub fn insert(&self, draft: BookDraft) -> StoreResult<BookId> {
        let genres = codec::effective_genres(draft.genres, &draft.category);
        self.conn.execute(
            "INSERT INTO books (photo, description, rating, tags, category, genres, spicyLevel, author, title)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                draft.photo,
                draft.description,
                draft.rating,
                codec::encode_list(&draft.tags)?,
                draft.category,
                codec::encode_list(&genres)?,
                draft.spicy_level,
                draft.author,
                draft.title,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Reads every record in id order, with list columns decoded and the
    /// genres fallback applied. A malformed list cell degrades that one
    /// field to an empty list rather than aborting the scan.
    pub fn read_all(&self) -> StoreResult<Vec<BookRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SELECT_COLUMNS} FROM books ORDER BY id"))?;
        let rows = stmt.query_map([], row_to_record)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Fetches a single record by id.
    pub fn get(&self, id: BookId) -> StoreResult<Option<BookRecord>> {
        let rec = self
            .conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM books WHERE id = ?1"),
                params![id],
                row_to_record,
            )
            .optional()?;
        Ok(rec)
    }

    /// Applies a sparse patch, keeping prior values for absent fields.
    /// Returns `Ok(false)` when the id does not exist; that is not an error.
    pub fn update(&self, id: BookId, patch: BookPatch) -> StoreResult<bool> {
        let Some(mut rec) = self.get(id)? else {
            return Ok(false);
        };
        patch.apply_to(&mut rec);
        let genres = codec::effective_genres(rec.genres, &rec.category);
        self.conn.execute(
            "UPDATE books SET photo = ?1, description = ?2, rating = ?3, tags = ?4,
             category = ?5, genres = ?6, spicyLevel = ?7, author = ?8, title = ?9
             WHERE id = ?10",
            params![
                rec.photo,
                rec.description,
                rec.rating,
                codec::encode_list(&rec.tags)?,
                rec.category,
                codec::encode_list(&genres)?,
                rec.spicy_level,
                rec.author,
                rec.title,
                id,
            ],
        )?;
        Ok(true)
    }

    /// Deletes the row with `id`, returning whether a row was removed.
    /// Deleting an id that was never stored is `Ok(false)`, not an error.
    pub fn delete(&self, id: BookId) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<BookRecord> {
    let category: String = row.get::<_, Option<String>>(5)?.unwrap_or_default();
    let tags = codec::decode_list("tags", row.get::<_, Option<String>>(4)?.as_deref());
    let genres = codec::effective_genres(
        codec::decode_list("genres", row.get::<_, Option<String>>(6)?.as_deref()),
        &category,
    );
    Ok(BookRecord {
        id: row.get(0)?,
        photo: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        title: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
        author: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
        rating: row
            .get::<_, Option<i64>>(3)?
            .and_then(|v| u8::try_from(v).ok())
            .unwrap_or(0),
        tags,
        category,
        genres,
        spicy_level: row
            .get::<_, Option<i64>>(7)?
            .and_then(|v| u8::try_from(v).ok())
            .unwrap_or(DEFAULT_SPICE_LEVEL),
    })
}
