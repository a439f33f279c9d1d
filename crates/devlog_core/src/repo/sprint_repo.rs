//! Sprint repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_sprints` orders by `year DESC, sprint_number DESC` (newest first).
//! - Goals are persisted with explicit positions and reloaded in order.

use crate::model::{EntityKind, Sprint, SprintId, SprintStatus, StatusVocabulary};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const SPRINT_SELECT_SQL: &str = "SELECT
    sprint_id,
    sprint_number,
    year,
    start_date,
    end_date,
    status
FROM sprints";

/// Repository interface for sprint fetches and admin mutations.
pub trait SprintRepository {
    fn create_sprint(&self, sprint: &Sprint) -> RepoResult<SprintId>;
    fn get_sprint(&self, sprint_id: SprintId) -> RepoResult<Option<Sprint>>;
    /// Lists all sprints ordered by `year DESC, sprint_number DESC`.
    fn list_sprints(&self) -> RepoResult<Vec<Sprint>>;
    fn delete_sprint(&self, sprint_id: SprintId) -> RepoResult<()>;
}

/// SQLite-backed sprint repository.
pub struct SqliteSprintRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSprintRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SprintRepository for SqliteSprintRepository<'_> {
    fn create_sprint(&self, sprint: &Sprint) -> RepoResult<SprintId> {
        self.conn.execute(
            "INSERT INTO sprints (sprint_id, sprint_number, year, start_date, end_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                sprint.sprint_id.to_string(),
                sprint.sprint_number,
                sprint.year,
                sprint.start_date.as_str(),
                sprint.end_date.as_str(),
                sprint.status.token(),
            ],
        )?;

        for (position, goal) in sprint.goals.iter().enumerate() {
            self.conn.execute(
                "INSERT INTO sprint_goals (sprint_id, position, goal) VALUES (?1, ?2, ?3);",
                params![sprint.sprint_id.to_string(), position as i64, goal.as_str()],
            )?;
        }

        Ok(sprint.sprint_id)
    }

    fn get_sprint(&self, sprint_id: SprintId) -> RepoResult<Option<Sprint>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SPRINT_SELECT_SQL} WHERE sprint_id = ?1;"))?;
        let mut rows = stmt.query([sprint_id.to_string()])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_sprint_row(self.conn, row)?));
        }

        Ok(None)
    }

    fn list_sprints(&self) -> RepoResult<Vec<Sprint>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SPRINT_SELECT_SQL} ORDER BY year DESC, sprint_number DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut sprints = Vec::new();

        while let Some(row) = rows.next()? {
            sprints.push(parse_sprint_row(self.conn, row)?);
        }

        Ok(sprints)
    }

    fn delete_sprint(&self, sprint_id: SprintId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM sprints WHERE sprint_id = ?1;",
            [sprint_id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Sprint, sprint_id));
        }

        Ok(())
    }
}

fn parse_sprint_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Sprint> {
    let id_text: String = row.get("sprint_id")?;
    let sprint_id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid `{id_text}` in sprints.sprint_id"))
    })?;

    let status_text: String = row.get("status")?;

    Ok(Sprint {
        sprint_id,
        sprint_number: row.get("sprint_number")?,
        year: row.get("year")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        status: SprintStatus::from_token(&status_text),
        goals: load_goals(conn, &id_text)?,
    })
}

fn load_goals(conn: &Connection, sprint_id: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT goal FROM sprint_goals WHERE sprint_id = ?1 ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([sprint_id])?;
    let mut goals = Vec::new();
    while let Some(row) = rows.next()? {
        goals.push(row.get(0)?);
    }
    Ok(goals)
}
