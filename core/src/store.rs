//! SQLite session persistence.
//!
//! RULE: Only store.rs talks to the database.
//! The desk persists exactly one thing across reloads, the signed-in
//! user, under `SESSION_USER_KEY`. Everything else is session-only.

use crate::{auth::User, error::MusterResult, types::Timestamp};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

pub const SESSION_USER_KEY: &str = "muster-user";

pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Open (or create) the session database at `path`.
    /// `file:` URIs are accepted, including shared in-memory databases.
    pub fn open(path: &str) -> MusterResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL only applies to real files; in-memory databases ignore it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open a private in-memory database (used in tests).
    pub fn in_memory() -> MusterResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> MusterResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_session.sql"))?;
        Ok(())
    }

    // ── Key/value ──────────────────────────────────────────────

    pub fn put(&self, key: &str, value: &str, at: Timestamp) -> MusterResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, at.to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> MusterResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn delete(&self, key: &str) -> MusterResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Signed-in user ─────────────────────────────────────────

    pub fn save_user(&self, user: &User, at: Timestamp) -> MusterResult<()> {
        let json = serde_json::to_string(user)?;
        self.put(SESSION_USER_KEY, &json, at)
    }

    /// The persisted user, if any. A corrupt entry is dropped rather than
    /// locking the desk out.
    pub fn load_user(&self) -> MusterResult<Option<User>> {
        let Some(json) = self.get(SESSION_USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log::warn!("discarding unreadable session entry: {e}");
                self.delete(SESSION_USER_KEY)?;
                Ok(None)
            }
        }
    }

    pub fn clear_user(&self) -> MusterResult<()> {
        self.delete(SESSION_USER_KEY)
    }
}
