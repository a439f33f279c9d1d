//! Sprint domain model.
//!
//! # Invariants
//! - `sprint_id` is stable and never reused for another sprint.
//! - `goals` keep their authored order.

use super::StatusVocabulary;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a sprint.
pub type SprintId = Uuid;

/// Lifecycle state for a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SprintStatus {
    Planned,
    Active,
    Completed,
}

impl StatusVocabulary for SprintStatus {
    const ALL: &'static [Self] = &[Self::Planned, Self::Active, Self::Completed];

    fn default_status() -> Self {
        Self::Planned
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// One sprint, as fetched from the `sprints` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// Stable display key.
    pub sprint_id: SprintId,
    pub sprint_number: i64,
    pub year: i64,
    /// ISO date, `YYYY-MM-DD`.
    pub start_date: String,
    /// ISO date, `YYYY-MM-DD`.
    pub end_date: String,
    pub status: SprintStatus,
    /// Ordered goal list; order is part of the record.
    pub goals: Vec<String>,
}

impl Sprint {
    /// Creates a planned sprint with a generated stable ID and no goals.
    pub fn new(
        sprint_number: i64,
        year: i64,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            sprint_id: Uuid::new_v4(),
            sprint_number,
            year,
            start_date: start_date.into(),
            end_date: end_date.into(),
            status: SprintStatus::default_status(),
            goals: Vec::new(),
        }
    }
}
