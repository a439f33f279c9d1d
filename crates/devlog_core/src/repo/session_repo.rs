//! Operator session store backing the admin area gate.
//!
//! # Invariants
//! - Tokens are opaque UUIDs, never reused.
//! - Sign-out revokes the row instead of deleting it.
//! - Revoking an unknown or already-revoked token is a silent no-op; sign-out
//!   must stay total.

use crate::model::now_epoch_ms;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};
use uuid::Uuid;

/// Opaque session token handed to an authenticated operator.
pub type SessionToken = Uuid;

/// Repository interface for operator sessions.
pub trait SessionRepository {
    /// Creates a fresh session and returns its token.
    fn create_session(&self) -> RepoResult<SessionToken>;
    /// Returns whether the token names a live, unrevoked session.
    fn session_is_active(&self, token: SessionToken) -> RepoResult<bool>;
    /// Revokes the session. Total: unknown tokens are ignored.
    fn invalidate_session(&self, token: SessionToken) -> RepoResult<()>;
}

/// SQLite-backed session repository.
pub struct SqliteSessionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSessionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SessionRepository for SqliteSessionRepository<'_> {
    fn create_session(&self) -> RepoResult<SessionToken> {
        let token = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO sessions (token, created_at) VALUES (?1, ?2);",
            params![token.to_string(), now_epoch_ms()],
        )?;
        Ok(token)
    }

    fn session_is_active(&self, token: SessionToken) -> RepoResult<bool> {
        let active: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sessions WHERE token = ?1 AND revoked = 0
            );",
            [token.to_string()],
            |row| row.get(0),
        )?;
        Ok(active == 1)
    }

    fn invalidate_session(&self, token: SessionToken) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE sessions SET revoked = 1 WHERE token = ?1;",
            [token.to_string()],
        )?;
        Ok(())
    }
}
