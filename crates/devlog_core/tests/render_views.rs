use devlog_core::db::open_db_in_memory;
use devlog_core::model::{Idea, IdeaStatus, Update};
use devlog_core::render::page::Notice;
use devlog_core::render::views::{
    idea_detail_page, idea_list_page, material_list_page, update_detail_page, update_list_page,
    DetailOutcome,
};
use devlog_core::repo::{
    ContentRepository, IdeaRepository, RepoError, RepoResult, SqliteContentRepository,
    SqliteIdeaRepository,
};
use devlog_core::FilterEngine;

/// Stand-in for an unreachable datastore.
struct FailingIdeaRepo;

impl IdeaRepository for FailingIdeaRepo {
    fn create_idea(&self, _idea: &Idea) -> RepoResult<i64> {
        Err(RepoError::InvalidData("datastore offline".to_string()))
    }

    fn get_idea(&self, _idea_number: i64) -> RepoResult<Option<Idea>> {
        Err(RepoError::InvalidData("datastore offline".to_string()))
    }

    fn list_ideas(&self) -> RepoResult<Vec<Idea>> {
        Err(RepoError::InvalidData("datastore offline".to_string()))
    }

    fn delete_idea(&self, _idea_number: i64) -> RepoResult<()> {
        Err(RepoError::InvalidData("datastore offline".to_string()))
    }
}

#[test]
fn list_page_renders_one_card_per_record_with_status_markup() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteIdeaRepository::new(&conn);

    let mut active = Idea::new(1, "Offline-first notes");
    active.status = IdeaStatus::Active;
    repo.create_idea(&active).unwrap();
    let mut archived = Idea::new(2, "Old prototype");
    archived.status = IdeaStatus::Archived;
    repo.create_idea(&archived).unwrap();

    let page = idea_list_page(&repo);
    assert!(page.notice.is_none());
    assert_eq!(page.cards.len(), 2);
    assert!(page.cards[0]
        .classes
        .contains(&"status-active".to_string()));
    assert_eq!(page.cards[0].status_attr.as_deref(), Some("active"));
    assert_eq!(page.cards[1].status_attr.as_deref(), Some("archived"));

    // Sentinel control first and pre-marked active, then the vocabulary.
    let tokens: Vec<&str> = page
        .controls
        .iter()
        .map(|control| control.filter_token.as_str())
        .collect();
    assert_eq!(
        tokens,
        vec!["all", "planned", "active", "completed", "archived"]
    );
    assert!(page.controls[0].active);

    let html = page.to_html();
    assert!(html.contains("data-filter=\"all\""));
    assert!(html.contains("class=\"card status-active\""));
}

#[test]
fn empty_list_renders_none_found_and_zero_cards() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteIdeaRepository::new(&conn);

    let mut page = idea_list_page(&repo);
    assert_eq!(
        page.notice,
        Some(Notice::Empty("No ideas found.".to_string()))
    );
    assert!(page.cards.is_empty());

    // The filter engine still attaches safely over the empty card set.
    let mut engine = FilterEngine::new();
    engine.install(&page);
    engine.activate(&mut page, 1);
    assert!(page.cards.is_empty());
}

#[test]
fn fetch_error_renders_message_and_controls_stay_safe() {
    let mut page = idea_list_page(&FailingIdeaRepo);

    match &page.notice {
        Some(Notice::Error(message)) => assert!(message.contains("datastore offline")),
        other => panic!("expected error notice, got {other:?}"),
    }
    assert!(page.cards.is_empty());
    assert!(!page.controls.is_empty());

    let mut engine = FilterEngine::new();
    engine.install(&page);
    engine.activate(&mut page, 2);
    assert!(page.cards.is_empty());
}

#[test]
fn detail_page_distinguishes_found_not_found_and_failure() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteIdeaRepository::new(&conn);
    repo.create_idea(&Idea::new(3, "Dark mode pass")).unwrap();

    match idea_detail_page(&repo, 3) {
        DetailOutcome::Found(page) => {
            assert_eq!(page.cards.len(), 1);
            assert!(page.cards[0].body_html.contains("Dark mode pass"));
        }
        other => panic!("expected found, got {other:?}"),
    }

    assert_eq!(idea_detail_page(&repo, 99), DetailOutcome::NotFound);

    match idea_detail_page(&FailingIdeaRepo, 3) {
        DetailOutcome::Failed(message) => assert!(message.contains("datastore offline")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn statusless_entities_render_without_filter_controls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContentRepository::new(&conn);
    repo.create_update(&Update::new("beta", "Beta launch"))
        .unwrap();

    let updates = update_list_page(&repo);
    assert!(updates.controls.is_empty());
    assert_eq!(updates.cards.len(), 1);
    assert_eq!(updates.cards[0].status_attr, None);

    let materials = material_list_page(&repo);
    assert!(materials.controls.is_empty());
    assert_eq!(
        materials.notice,
        Some(Notice::Empty("No materials found.".to_string()))
    );

    match update_detail_page(&repo, "beta") {
        DetailOutcome::Found(page) => assert_eq!(page.cards.len(), 1),
        other => panic!("expected found, got {other:?}"),
    }
}
