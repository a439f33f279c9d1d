//! Story repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_stories` orders by `story_number ASC`.
//! - Unknown persisted status values decode to the story default; unknown
//!   priority values are rejected as invalid data.

use crate::model::{EntityKind, Priority, StatusVocabulary, Story, StoryStatus};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const STORY_SELECT_SQL: &str = "SELECT
    story_number,
    title,
    description,
    priority,
    status
FROM stories";

/// Repository interface for story fetches and admin mutations.
pub trait StoryRepository {
    fn create_story(&self, story: &Story) -> RepoResult<i64>;
    fn get_story(&self, story_number: i64) -> RepoResult<Option<Story>>;
    /// Lists all stories ordered by `story_number ASC`.
    fn list_stories(&self) -> RepoResult<Vec<Story>>;
    fn delete_story(&self, story_number: i64) -> RepoResult<()>;
}

/// SQLite-backed story repository.
pub struct SqliteStoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StoryRepository for SqliteStoryRepository<'_> {
    fn create_story(&self, story: &Story) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO stories (story_number, title, description, priority, status)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                story.story_number,
                story.title.as_str(),
                story.description.as_str(),
                story.priority.as_str(),
                story.status.token(),
            ],
        )?;

        Ok(story.story_number)
    }

    fn get_story(&self, story_number: i64) -> RepoResult<Option<Story>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STORY_SELECT_SQL} WHERE story_number = ?1;"))?;
        let mut rows = stmt.query([story_number])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_story_row(row)?));
        }

        Ok(None)
    }

    fn list_stories(&self) -> RepoResult<Vec<Story>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STORY_SELECT_SQL} ORDER BY story_number ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut stories = Vec::new();

        while let Some(row) = rows.next()? {
            stories.push(parse_story_row(row)?);
        }

        Ok(stories)
    }

    fn delete_story(&self, story_number: i64) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM stories WHERE story_number = ?1;", [story_number])?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Story, story_number));
        }

        Ok(())
    }
}

fn parse_story_row(row: &Row<'_>) -> RepoResult<Story> {
    let priority_text: String = row.get("priority")?;
    let priority = Priority::parse(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in stories.priority"
        ))
    })?;

    let status_text: String = row.get("status")?;

    Ok(Story {
        story_number: row.get("story_number")?,
        title: row.get("title")?,
        description: row.get("description")?,
        priority,
        status: StoryStatus::from_token(&status_text),
    })
}
