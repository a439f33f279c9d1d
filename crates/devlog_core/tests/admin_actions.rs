use devlog_core::db::open_db_in_memory;
use devlog_core::model::{EntityKind, Idea};
use devlog_core::repo::{
    IdeaRepository, SessionRepository, SqliteIdeaRepository, SqliteSessionRepository,
};
use devlog_core::{AdminService, Confirmation, DeleteOutcome, Route};
use uuid::Uuid;

#[test]
fn cancelled_delete_leaves_the_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    let ideas = SqliteIdeaRepository::new(&conn);
    ideas.create_idea(&Idea::new(1, "keep me")).unwrap();

    let admin = AdminService::new(&conn);
    let outcome = admin.delete(EntityKind::Idea, "1", Confirmation::Cancelled);

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(ideas.get_idea(1).unwrap().is_some());
}

#[test]
fn confirmed_delete_removes_the_row_and_requests_refresh() {
    let conn = open_db_in_memory().unwrap();
    let ideas = SqliteIdeaRepository::new(&conn);
    ideas.create_idea(&Idea::new(1, "remove me")).unwrap();

    let admin = AdminService::new(&conn);
    let outcome = admin.delete(EntityKind::Idea, "1", Confirmation::Confirmed);

    assert_eq!(outcome, DeleteOutcome::Deleted { refresh: true });
    assert!(ideas.get_idea(1).unwrap().is_none());
}

#[test]
fn failed_delete_surfaces_the_error_message_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let admin = AdminService::new(&conn);

    match admin.delete(EntityKind::Story, "7", Confirmation::Confirmed) {
        DeleteOutcome::Failed(message) => assert_eq!(message, "story not found: 7"),
        other => panic!("expected failure, got {other:?}"),
    }

    match admin.delete(EntityKind::Figure, "not-a-number", Confirmation::Confirmed) {
        DeleteOutcome::Failed(message) => assert!(message.contains("expected a number")),
        other => panic!("expected failure, got {other:?}"),
    }

    match admin.delete(EntityKind::Sprint, "garbage", Confirmation::Confirmed) {
        DeleteOutcome::Failed(message) => assert!(message.contains("expected a uuid")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn delete_dispatches_by_slug_for_content_entities() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO updates (slug, title, body, published_at)
         VALUES ('beta', 'Beta launch', '', 0);",
        [],
    )
    .unwrap();

    let admin = AdminService::new(&conn);
    let outcome = admin.delete(EntityKind::Update, "beta", Confirmation::Confirmed);
    assert_eq!(outcome, DeleteOutcome::Deleted { refresh: true });

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM updates;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn sign_out_invalidates_the_session_and_navigates_home() {
    let conn = open_db_in_memory().unwrap();
    let sessions = SqliteSessionRepository::new(&conn);
    let token = sessions.create_session().unwrap();
    assert!(sessions.session_is_active(token).unwrap());

    let admin = AdminService::new(&conn);
    let outcome = admin.sign_out(token);

    assert_eq!(outcome.destination, Route::Home);
    assert!(outcome.refresh);
    assert!(!sessions.session_is_active(token).unwrap());
}

#[test]
fn sign_out_with_unknown_token_is_still_total() {
    let conn = open_db_in_memory().unwrap();
    let admin = AdminService::new(&conn);

    let outcome = admin.sign_out(Uuid::new_v4());
    assert_eq!(outcome.destination, Route::Home);
    assert!(outcome.refresh);
}
