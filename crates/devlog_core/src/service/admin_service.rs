//! Admin mutation actions: destructive delete and sign-out.
//!
//! # Responsibility
//! - Gate deletes behind an explicit operator confirmation step.
//! - Surface mutation errors directly; never mask them as success.
//!
//! # Invariants
//! - An unconfirmed delete leaves the store untouched.
//! - A successful delete instructs a full data refresh of the current view.
//! - Sign-out is total: unknown tokens still navigate home cleanly.

use crate::model::EntityKind;
use crate::repo::{
    ContentRepository, IdeaRepository, SessionRepository, SessionToken, SprintRepository,
    SqliteContentRepository, SqliteIdeaRepository, SqliteSessionRepository,
    SqliteSprintRepository, SqliteStoryRepository, StoryRepository,
};
use log::{info, warn};
use rusqlite::Connection;
use uuid::Uuid;

/// Result of the operator's confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Outcome of a delete action, consumed by the admin view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Row deleted; the current view must refetch its data.
    Deleted { refresh: bool },
    /// Operator declined the confirmation step; nothing happened.
    Cancelled,
    /// Mutation failed; the message is shown to the operator verbatim.
    Failed(String),
}

/// Navigation target after an admin action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

/// Outcome of a sign-out action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOutOutcome {
    pub destination: Route,
    pub refresh: bool,
}

/// Admin action service over one migrated connection.
pub struct AdminService<'conn> {
    conn: &'conn Connection,
}

impl<'conn> AdminService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Deletes one entity row by entity kind and display key.
    ///
    /// The confirmation argument is the outcome of the operator's dialog;
    /// without `Confirmation::Confirmed` the request is dropped before any
    /// repository call.
    pub fn delete(&self, kind: EntityKind, key: &str, confirmation: Confirmation) -> DeleteOutcome {
        if confirmation == Confirmation::Cancelled {
            info!("event=admin_delete module=service status=cancelled kind={kind} key={key}");
            return DeleteOutcome::Cancelled;
        }

        let result: Result<(), String> = match kind {
            EntityKind::Idea => parse_number(kind, key).and_then(|number| {
                SqliteIdeaRepository::new(self.conn)
                    .delete_idea(number)
                    .map_err(|err| err.to_string())
            }),
            EntityKind::Story => parse_number(kind, key).and_then(|number| {
                SqliteStoryRepository::new(self.conn)
                    .delete_story(number)
                    .map_err(|err| err.to_string())
            }),
            EntityKind::Sprint => parse_uuid(kind, key).and_then(|id| {
                SqliteSprintRepository::new(self.conn)
                    .delete_sprint(id)
                    .map_err(|err| err.to_string())
            }),
            EntityKind::Update => SqliteContentRepository::new(self.conn)
                .delete_update(key)
                .map_err(|err| err.to_string()),
            EntityKind::Figure => parse_number(kind, key).and_then(|number| {
                SqliteContentRepository::new(self.conn)
                    .delete_figure(number)
                    .map_err(|err| err.to_string())
            }),
            EntityKind::Material => SqliteContentRepository::new(self.conn)
                .delete_material(key)
                .map_err(|err| err.to_string()),
        };

        match result {
            Ok(()) => {
                info!("event=admin_delete module=service status=ok kind={kind} key={key}");
                DeleteOutcome::Deleted { refresh: true }
            }
            Err(message) => {
                warn!(
                    "event=admin_delete module=service status=error kind={kind} key={key} error={message}"
                );
                DeleteOutcome::Failed(message)
            }
        }
    }

    /// Invalidates the operator session, then navigates home with a refresh.
    pub fn sign_out(&self, token: SessionToken) -> SignOutOutcome {
        let sessions = SqliteSessionRepository::new(self.conn);
        if let Err(err) = sessions.invalidate_session(token) {
            // Sign-out is fire-and-forget: the session row state is best
            // effort, navigation happens regardless.
            warn!("event=admin_sign_out module=service status=error error={err}");
        } else {
            info!("event=admin_sign_out module=service status=ok");
        }

        SignOutOutcome {
            destination: Route::Home,
            refresh: true,
        }
    }
}

fn parse_number(kind: EntityKind, key: &str) -> Result<i64, String> {
    key.trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid {kind} key `{key}`: expected a number"))
}

fn parse_uuid(kind: EntityKind, key: &str) -> Result<Uuid, String> {
    Uuid::parse_str(key.trim()).map_err(|_| format!("invalid {kind} key `{key}`: expected a uuid"))
}
