//! Story domain model.

use super::StatusVocabulary;
use serde::{Deserialize, Serialize};

/// Delivery urgency for a story. Not a status vocabulary: an unknown
/// persisted priority is a data error, not a fallback case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Partial decoder: unknown values are rejected by the caller.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Lifecycle state for a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryStatus {
    Backlog,
    Planned,
    InProgress,
    Done,
}

impl StatusVocabulary for StoryStatus {
    const ALL: &'static [Self] = &[Self::Backlog, Self::Planned, Self::InProgress, Self::Done];

    fn default_status() -> Self {
        Self::Backlog
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// One tracked story, as fetched from the `stories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Public display key.
    pub story_number: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: StoryStatus,
}

impl Story {
    /// Creates a story with medium priority in the backlog.
    pub fn new(story_number: i64, title: impl Into<String>) -> Self {
        Self {
            story_number,
            title: title.into(),
            description: String::new(),
            priority: Priority::Medium,
            status: StoryStatus::default_status(),
        }
    }
}
