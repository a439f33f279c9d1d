//! Core domain logic for devlog, a project-tracking content site.
//! This crate is the single source of truth for taxonomy and filter rules.

pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;

pub use filter::engine::{FilterEngine, FilterState, ALL_TOKEN};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{EntityKind, StatusVocabulary};
pub use repo::{RepoError, RepoResult};
pub use service::admin_service::{
    AdminService, Confirmation, DeleteOutcome, Route, SignOutOutcome,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
