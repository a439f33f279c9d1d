//! Operator-facing use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into admin-level actions.
//! - Keep rendering and filtering decoupled from mutation outcomes.

pub mod admin_service;
