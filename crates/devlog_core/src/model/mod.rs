//! Taxonomy domain model shared by every list/detail view.
//!
//! # Responsibility
//! - Define the canonical record per entity table.
//! - Define each entity's status vocabulary and its fallback default.
//!
//! # Invariants
//! - Every entity has exactly one display key, unique within its table.
//! - Decoding an unrecognized status value yields the entity default, never
//!   an error.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod content;
pub mod idea;
pub mod sprint;
pub mod story;

pub use content::{Figure, FigureStatus, Material, Update};
pub use idea::{Idea, IdeaStatus};
pub use sprint::{Sprint, SprintId, SprintStatus};
pub use story::{Priority, Story, StoryStatus};

/// Contract every status vocabulary implements.
///
/// Tokens double as filter selectors and as the suffix of the card's
/// `status-<token>` styling class, so they stay lowercase and dash-separated.
pub trait StatusVocabulary: Sized + Copy + 'static {
    /// Vocabulary in declaration order; drives filter control emission.
    const ALL: &'static [Self];

    /// Fallback used when decoding an unrecognized persisted value.
    fn default_status() -> Self;

    /// Canonical lowercase token, e.g. `in-progress`.
    fn token(&self) -> &'static str;

    /// Total decoder: unknown values fall back to [`default_status`].
    ///
    /// [`default_status`]: StatusVocabulary::default_status
    fn from_token(value: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.token() == value)
            .unwrap_or_else(Self::default_status)
    }

    /// Styling class embedded into a card's class set.
    fn css_class(&self) -> String {
        format!("status-{}", self.token())
    }
}

/// Entity table discriminator for admin mutations and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Idea,
    Story,
    Sprint,
    Update,
    Figure,
    Material,
}

impl EntityKind {
    /// Backing table name.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Idea => "ideas",
            Self::Story => "stories",
            Self::Sprint => "sprints",
            Self::Update => "updates",
            Self::Figure => "figures",
            Self::Material => "materials",
        }
    }

    /// Singular label used in operator-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Story => "story",
            Self::Sprint => "sprint",
            Self::Update => "update",
            Self::Figure => "figure",
            Self::Material => "material",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{EntityKind, StatusVocabulary};
    use crate::model::idea::IdeaStatus;

    #[test]
    fn from_token_falls_back_to_default_for_unknown_values() {
        assert_eq!(IdeaStatus::from_token("archived"), IdeaStatus::Archived);
        assert_eq!(IdeaStatus::from_token("nonsense"), IdeaStatus::Planned);
        assert_eq!(IdeaStatus::from_token(""), IdeaStatus::Planned);
    }

    #[test]
    fn css_class_is_dash_prefixed_token() {
        assert_eq!(IdeaStatus::Active.css_class(), "status-active");
    }

    #[test]
    fn entity_kind_maps_to_table_names() {
        assert_eq!(EntityKind::Idea.table_name(), "ideas");
        assert_eq!(EntityKind::Material.table_name(), "materials");
    }
}
