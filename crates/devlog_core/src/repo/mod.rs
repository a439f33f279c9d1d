//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity table.
//! - Isolate SQLite query details from rendering and admin orchestration.
//!
//! # Invariants
//! - List queries return rows in each entity's stated display order.
//! - Status columns are decoded with the vocabulary fallback rule; only
//!   non-status columns may raise `InvalidData`.
//! - Deletes of missing rows surface `NotFound`, not silent success.

use crate::db::DbError;
use crate::model::EntityKind;
use rusqlite::{params, Connection};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod content_repo;
pub mod idea_repo;
pub mod session_repo;
pub mod sprint_repo;
pub mod story_repo;

pub use content_repo::{ContentRepository, SqliteContentRepository};
pub use idea_repo::{IdeaRepository, SqliteIdeaRepository};
pub use session_repo::{SessionRepository, SessionToken, SqliteSessionRepository};
pub use sprint_repo::{SprintRepository, SqliteSprintRepository};
pub use story_repo::{SqliteStoryRepository, StoryRepository};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for taxonomy persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { kind: EntityKind, key: String },
    InvalidData(String),
}

impl RepoError {
    pub(crate) fn not_found(kind: EntityKind, key: impl Display) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, key } => write!(f, "{kind} not found: {key}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
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

/// Normalizes one tag value: trimmed and lowercased, empty rejected.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes and deduplicates tag values, sorted by name.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for tag in tags {
        if let Some(value) = normalize_tag(tag) {
            unique.insert(value);
        }
    }
    unique.into_iter().collect()
}

/// Replaces the whole tag set linked to one owner row.
///
/// `link_table`/`owner_column` are static identifiers chosen by the calling
/// repository, never user input.
pub(crate) fn replace_tags(
    conn: &Connection,
    link_table: &str,
    owner_column: &str,
    owner_id: i64,
    tags: &[String],
) -> RepoResult<()> {
    conn.execute(
        &format!("DELETE FROM {link_table} WHERE {owner_column} = ?1;"),
        [owner_id],
    )?;

    for tag in normalize_tags(tags) {
        conn.execute(
            "INSERT OR IGNORE INTO tags (name) VALUES (?1);",
            [tag.as_str()],
        )?;
        conn.execute(
            &format!(
                "INSERT INTO {link_table} ({owner_column}, tag_id)
                 SELECT ?1, id FROM tags WHERE name = ?2 COLLATE NOCASE;"
            ),
            params![owner_id, tag.as_str()],
        )?;
    }

    Ok(())
}

/// Loads the tag set linked to one owner row, lowercased and name-sorted.
pub(crate) fn load_tags(
    conn: &Connection,
    link_table: &str,
    owner_column: &str,
    owner_id: i64,
) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT t.name
         FROM {link_table} lt
         INNER JOIN tags t ON t.id = lt.tag_id
         WHERE lt.{owner_column} = ?1
         ORDER BY t.name COLLATE NOCASE ASC;"
    ))?;
    let mut rows = stmt.query([owner_id])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        let value: String = row.get(0)?;
        tags.push(value.to_lowercase());
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, normalize_tags};

    #[test]
    fn normalize_tag_trims_and_lowercases() {
        assert_eq!(normalize_tag("  Rust "), Some("rust".to_string()));
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn normalize_tags_deduplicates_case_insensitively() {
        let tags = vec![
            "Web".to_string(),
            "RUST".to_string(),
            "rust".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            normalize_tags(&tags),
            vec!["rust".to_string(), "web".to_string()]
        );
    }
}
