//! Client-resident status filtering.
//!
//! # Responsibility
//! - Keep card visibility synchronized with the single selected filter.
//! - Maintain single-selection state among filter controls.
//!
//! # Invariants
//! - Every activation is a synchronous, total, idempotent recomputation
//!   over the elements discovered at attach time.
//! - Discovery happens exactly once per engine instance.

pub mod engine;

pub use engine::{FilterEngine, FilterState, ALL_TOKEN};
