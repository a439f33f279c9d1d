//! Update, figure and material domain models.
//!
//! Updates and materials carry no status vocabulary; their list views render
//! without filter controls.

use super::{now_epoch_ms, StatusVocabulary};
use serde::{Deserialize, Serialize};

/// One dated announcement, as fetched from the `updates` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Public display key.
    pub slug: String,
    pub title: String,
    pub body: String,
    /// Publication timestamp in epoch milliseconds.
    pub published_at: i64,
}

impl Update {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            body: String::new(),
            published_at: now_epoch_ms(),
        }
    }
}

/// Visibility state for a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureStatus {
    Active,
    Archived,
}

impl StatusVocabulary for FigureStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Archived];

    fn default_status() -> Self {
        Self::Active
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

/// One gallery figure, as fetched from the `figures` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// Public display key.
    pub figure_number: i64,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub alt_text: String,
    pub status: FigureStatus,
}

impl Figure {
    pub fn new(
        figure_number: i64,
        title: impl Into<String>,
        image_path: impl Into<String>,
    ) -> Self {
        Self {
            figure_number,
            title: title.into(),
            description: String::new(),
            image_path: image_path.into(),
            alt_text: String::new(),
            status: FigureStatus::default_status(),
        }
    }
}

/// One reading-list material, as fetched from the `materials` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Public display key.
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Normalized lowercase tags, sorted by name.
    pub tags: Vec<String>,
}

impl Material {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            excerpt: String::new(),
            author: String::new(),
            date: date.into(),
            tags: Vec::new(),
        }
    }
}
