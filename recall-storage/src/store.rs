//! SqliteDocumentStore — owns the connection, initializes the schema on
//! open, implements IDocumentStore.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tracing::{debug, info};

use recall_core::errors::{RecallResult, StorageError};
use recall_core::models::Document;
use recall_core::traits::IDocumentStore;

use crate::to_storage_err;

/// Durable document store on a single SQLite connection.
///
/// Documents upsert by ID; `load` returns them in first-insertion order,
/// which is the cache's arrival order when saving snapshots.
pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> RecallResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        info!(path = %path.display(), "document store opened");
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> RecallResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> RecallResult<()> {
        self.lock()
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS documents (
                    seq          INTEGER PRIMARY KEY AUTOINCREMENT,
                    id           TEXT NOT NULL UNIQUE,
                    content      TEXT NOT NULL,
                    source       TEXT NOT NULL,
                    embedding    BLOB NOT NULL,
                    dimensions   INTEGER NOT NULL,
                    content_hash TEXT NOT NULL,
                    created_at   TEXT NOT NULL
                )",
            )
            .map_err(|e| to_storage_err(e.to_string()))
    }

    /// A dropped transaction rolls back, so the database stays consistent
    /// even after a panicked writer; poisoning is recovered.
    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IDocumentStore for SqliteDocumentStore {
    fn save(&self, documents: &[Document]) -> RecallResult<()> {
        let mut conn = self.lock();
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;

        for doc in documents {
            tx.execute(
                "INSERT INTO documents
                     (id, content, source, embedding, dimensions, content_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(id) DO UPDATE SET
                     content = excluded.content,
                     source = excluded.source,
                     embedding = excluded.embedding,
                     dimensions = excluded.dimensions,
                     content_hash = excluded.content_hash,
                     created_at = excluded.created_at",
                params![
                    doc.id,
                    doc.content,
                    doc.source,
                    f32_vec_to_bytes(&doc.embedding),
                    doc.embedding.len() as i64,
                    doc.content_hash,
                    doc.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        }

        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        debug!(count = documents.len(), "documents saved");
        Ok(())
    }

    fn load(&self) -> RecallResult<Vec<Document>> {
        let conn = self.lock();
        let mut stmt = conn
            .prepare(
                "SELECT id, content, source, embedding, dimensions, content_hash, created_at
                 FROM documents ORDER BY seq",
            )
            .map_err(|e| to_storage_err(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Vec<u8>>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            })
            .map_err(|e| to_storage_err(e.to_string()))?;

        let mut documents = Vec::new();
        for row in rows {
            let (id, content, source, blob, dims, content_hash, created_at) =
                row.map_err(|e| to_storage_err(e.to_string()))?;

            let embedding = bytes_to_f32_vec(&blob, dims as usize).ok_or_else(|| {
                StorageError::CorruptEmbedding {
                    id: id.clone(),
                    details: format!(
                        "blob of {} bytes cannot hold {} dimensions",
                        blob.len(),
                        dims
                    ),
                }
            })?;

            let created_at = DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| to_storage_err(format!("invalid created_at for {id}: {e}")))?
                .with_timezone(&Utc);

            documents.push(Document {
                id,
                content,
                source,
                embedding,
                content_hash,
                created_at,
            });
        }

        debug!(count = documents.len(), "documents loaded");
        Ok(documents)
    }

    fn clear(&self) -> RecallResult<()> {
        self.lock()
            .execute("DELETE FROM documents", [])
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    }
}

/// Convert f32 slice to bytes (little-endian).
fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to an f32 vec, rejecting blobs whose length does
/// not match the stored dimension count exactly.
fn bytes_to_f32_vec(bytes: &[u8], expected_dims: usize) -> Option<Vec<f32>> {
    if bytes.len() != expected_dims * 4 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect(),
    )
}
