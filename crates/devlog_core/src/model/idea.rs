//! Idea domain model.
//!
//! # Invariants
//! - `idea_number` is the public display key, unique within `ideas`.
//! - Tags are normalized (trimmed, lowercased, deduplicated) before
//!   persistence; the model itself does not enforce uniqueness.

use super::{now_epoch_ms, StatusVocabulary};
use serde::{Deserialize, Serialize};

/// Lifecycle state for an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaStatus {
    Planned,
    Active,
    Completed,
    Archived,
}

impl StatusVocabulary for IdeaStatus {
    const ALL: &'static [Self] = &[
        Self::Planned,
        Self::Active,
        Self::Completed,
        Self::Archived,
    ];

    fn default_status() -> Self {
        Self::Planned
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

/// One tracked idea, as fetched from the `ideas` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Public display key.
    pub idea_number: i64,
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    /// Normalized lowercase tags, sorted by name.
    pub tags: Vec<String>,
    /// Long-form markdown body.
    pub body: String,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
}

impl Idea {
    /// Creates an idea with default status and a fresh creation timestamp.
    pub fn new(idea_number: i64, title: impl Into<String>) -> Self {
        Self {
            idea_number,
            title: title.into(),
            description: String::new(),
            status: IdeaStatus::default_status(),
            tags: Vec::new(),
            body: String::new(),
            created_at: now_epoch_ms(),
        }
    }
}
