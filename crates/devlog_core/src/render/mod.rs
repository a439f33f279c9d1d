//! Server-side page assembly.
//!
//! # Responsibility
//! - Define the structural page model the filter engine operates over.
//! - Build one list page and one detail page per entity table.
//!
//! # Invariants
//! - A fetch error renders a visible error notice and zero cards.
//! - An empty fetch renders a visible "none found" notice and zero cards.
//! - A successful fetch renders exactly one card per record, with the
//!   record's status embedded in the card's class set.

pub mod page;
pub mod views;

pub use page::{Card, Display, FilterControl, Notice, Page, PageReadiness};
pub use views::DetailOutcome;
