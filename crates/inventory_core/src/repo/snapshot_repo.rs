//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map `user id -> Snapshot` through a durable key/value table.
//! - Encode snapshots as JSON with the camelCase collection names used by
//!   existing stored payloads.
//!
//! # Invariants
//! - Storage keys are always `userData_<userId>`.
//! - A missing row is `Ok(None)`, never an error.
//! - A row whose payload cannot be decoded is reported as `InvalidData`.

use crate::db::DbError;
use crate::model::snapshot::Snapshot;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

const STORAGE_KEY_PREFIX: &str = "userData_";

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot persistence error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Snapshot could not be encoded for storage.
    Encode(serde_json::Error),
    /// Stored payload is not a valid snapshot.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::InvalidData(message) => write!(f, "invalid stored snapshot: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable per-user snapshot storage.
pub trait SnapshotRepository {
    fn load(&self, user_id: &str) -> RepoResult<Option<Snapshot>>;
    fn save(&self, user_id: &str, snapshot: &Snapshot) -> RepoResult<()>;
}

impl<R: SnapshotRepository + ?Sized> SnapshotRepository for &R {
    fn load(&self, user_id: &str) -> RepoResult<Option<Snapshot>> {
        (**self).load(user_id)
    }

    fn save(&self, user_id: &str, snapshot: &Snapshot) -> RepoResult<()> {
        (**self).save(user_id, snapshot)
    }
}

/// Returns the storage key that namespaces one user's snapshot.
pub fn storage_key(user_id: &str) -> String {
    format!("{STORAGE_KEY_PREFIX}{user_id}")
}

/// SQLite-backed snapshot repository.
#[derive(Debug, Clone, Copy)]
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists user ids that currently have a stored snapshot.
    pub fn stored_user_ids(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT storage_key FROM user_snapshots ORDER BY storage_key ASC;")?;
        let mut rows = stmt.query([])?;
        let mut user_ids = Vec::new();
        while let Some(row) = rows.next()? {
            let key: String = row.get(0)?;
            if let Some(user_id) = key.strip_prefix(STORAGE_KEY_PREFIX) {
                user_ids.push(user_id.to_string());
            }
        }
        Ok(user_ids)
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self, user_id: &str) -> RepoResult<Option<Snapshot>> {
        let key = storage_key(user_id);
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM user_snapshots WHERE storage_key = ?1;",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            debug!("event=snapshot_load module=repo status=miss user_id={user_id}");
            return Ok(None);
        };

        let snapshot = serde_json::from_str::<Snapshot>(&payload).map_err(|err| {
            RepoError::InvalidData(format!("payload for `{key}` is not a snapshot: {err}"))
        })?;
        debug!(
            "event=snapshot_load module=repo status=hit user_id={user_id} bytes={}",
            payload.len()
        );
        Ok(Some(snapshot))
    }

    fn save(&self, user_id: &str, snapshot: &Snapshot) -> RepoResult<()> {
        let payload = serde_json::to_string(snapshot).map_err(RepoError::Encode)?;
        self.conn.execute(
            "INSERT INTO user_snapshots (storage_key, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(storage_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![storage_key(user_id), payload, now_epoch_ms()],
        )?;
        debug!(
            "event=snapshot_save module=repo status=ok user_id={user_id} bytes={}",
            payload.len()
        );
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
