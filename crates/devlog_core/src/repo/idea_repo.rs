//! Idea repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide ordered list and keyed detail fetches over `ideas`.
//! - Own idea tag-link persistence with full-set replacement semantics.
//!
//! # Invariants
//! - `list_ideas` orders by `idea_number ASC`.
//! - Unknown persisted status values decode to the idea default.

use crate::model::{EntityKind, Idea, IdeaStatus, StatusVocabulary};
use crate::repo::{load_tags, replace_tags, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const IDEA_SELECT_SQL: &str = "SELECT
    id,
    idea_number,
    title,
    description,
    status,
    body,
    created_at
FROM ideas";

/// Repository interface for idea fetches and admin mutations.
pub trait IdeaRepository {
    /// Persists one idea (including its tag set) and returns its display key.
    fn create_idea(&self, idea: &Idea) -> RepoResult<i64>;
    /// Fetches one idea by display key.
    fn get_idea(&self, idea_number: i64) -> RepoResult<Option<Idea>>;
    /// Lists all ideas ordered by `idea_number ASC`.
    fn list_ideas(&self) -> RepoResult<Vec<Idea>>;
    /// Deletes one idea by display key; missing rows surface `NotFound`.
    fn delete_idea(&self, idea_number: i64) -> RepoResult<()>;
}

/// SQLite-backed idea repository.
pub struct SqliteIdeaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteIdeaRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl IdeaRepository for SqliteIdeaRepository<'_> {
    fn create_idea(&self, idea: &Idea) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO ideas (idea_number, title, description, status, body, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                idea.idea_number,
                idea.title.as_str(),
                idea.description.as_str(),
                idea.status.token(),
                idea.body.as_str(),
                idea.created_at,
            ],
        )?;

        let row_id = self.conn.last_insert_rowid();
        replace_tags(self.conn, "idea_tags", "idea_id", row_id, &idea.tags)?;

        Ok(idea.idea_number)
    }

    fn get_idea(&self, idea_number: i64) -> RepoResult<Option<Idea>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{IDEA_SELECT_SQL} WHERE idea_number = ?1;"))?;
        let mut rows = stmt.query([idea_number])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_idea_row(self.conn, row)?));
        }

        Ok(None)
    }

    fn list_ideas(&self) -> RepoResult<Vec<Idea>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{IDEA_SELECT_SQL} ORDER BY idea_number ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut ideas = Vec::new();

        while let Some(row) = rows.next()? {
            ideas.push(parse_idea_row(self.conn, row)?);
        }

        Ok(ideas)
    }

    fn delete_idea(&self, idea_number: i64) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM ideas WHERE idea_number = ?1;", [idea_number])?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Idea, idea_number));
        }

        Ok(())
    }
}

fn parse_idea_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Idea> {
    let row_id: i64 = row.get("id")?;
    let status_text: String = row.get("status")?;

    Ok(Idea {
        idea_number: row.get("idea_number")?,
        title: row.get("title")?,
        description: row.get("description")?,
        // Unknown persisted statuses fall back to the default instead of
        // failing the whole list fetch.
        status: IdeaStatus::from_token(&status_text),
        tags: load_tags(conn, "idea_tags", "idea_id", row_id)?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
    })
}
