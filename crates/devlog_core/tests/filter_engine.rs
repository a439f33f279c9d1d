use devlog_core::render::page::{Card, Display, FilterControl, Page, PageReadiness};
use devlog_core::{FilterEngine, FilterState};

fn status_card(status: &str) -> Card {
    Card::new(vec!["card".to_string(), format!("status-{status}")])
}

fn gallery_page() -> Page {
    let mut page = Page::new("Figures");
    for token in ["all", "active", "archived"] {
        page.controls.push(FilterControl::new(token));
    }
    page.controls[0].active = true;
    page.cards.push(status_card("active"));
    page.cards.push(status_card("archived"));
    page.cards.push(status_card("active"));
    page
}

fn visible_indices(page: &Page) -> Vec<usize> {
    page.cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.display == Display::Shown)
        .map(|(index, _)| index)
        .collect()
}

fn active_tokens(page: &Page) -> Vec<&str> {
    page.controls
        .iter()
        .filter(|control| control.active)
        .map(|control| control.filter_token.as_str())
        .collect()
}

#[test]
fn concrete_filter_shows_only_matching_cards() {
    let mut page = gallery_page();
    let mut engine = FilterEngine::new();
    engine.install(&page);

    // control 1 is bound to "active"
    engine.activate(&mut page, 1);
    assert_eq!(visible_indices(&page), vec![0, 2]);
    assert_eq!(engine.state(), &FilterState::FilteredBy("active".to_string()));

    engine.activate(&mut page, 0);
    assert_eq!(visible_indices(&page), vec![0, 1, 2]);
    assert_eq!(engine.state(), &FilterState::Unfiltered);

    engine.activate(&mut page, 2);
    assert_eq!(visible_indices(&page), vec![1]);
}

#[test]
fn all_token_shows_every_card_regardless_of_prior_state() {
    let mut page = gallery_page();
    let mut engine = FilterEngine::new();
    engine.install(&page);

    engine.activate(&mut page, 2);
    assert_eq!(visible_indices(&page), vec![1]);

    engine.activate(&mut page, 0);
    assert_eq!(visible_indices(&page), vec![0, 1, 2]);
}

#[test]
fn exactly_one_control_is_active_after_any_sequence() {
    let mut page = gallery_page();
    let mut engine = FilterEngine::new();
    engine.install(&page);

    for index in [1, 2, 2, 0, 1, 1] {
        engine.activate(&mut page, index);
        assert_eq!(active_tokens(&page).len(), 1);
    }
    assert_eq!(active_tokens(&page), vec!["active"]);
}

#[test]
fn re_activation_is_idempotent() {
    let mut page = gallery_page();
    let mut engine = FilterEngine::new();
    engine.install(&page);

    engine.activate(&mut page, 1);
    let first_pass = page.clone();
    engine.activate(&mut page, 1);
    assert_eq!(page, first_pass);
}

#[test]
fn tokenless_card_is_hidden_under_any_concrete_filter() {
    let mut page = gallery_page();
    page.cards.push(Card::new(vec!["card".to_string()]));
    let mut engine = FilterEngine::new();
    engine.install(&page);

    engine.activate(&mut page, 1);
    assert_eq!(page.cards[3].display, Display::Hidden);

    engine.activate(&mut page, 0);
    assert_eq!(page.cards[3].display, Display::Shown);
}

#[test]
fn data_status_attribute_overrides_class_scanning() {
    let mut page = gallery_page();
    page.cards[1].status_attr = Some("active".to_string());
    let mut engine = FilterEngine::new();
    engine.install(&page);

    engine.activate(&mut page, 1);
    assert_eq!(visible_indices(&page), vec![0, 1, 2]);
}

#[test]
fn attach_is_guarded_against_double_registration() {
    let mut page = gallery_page();
    let mut engine = FilterEngine::new();
    engine.install(&page);
    assert!(engine.is_attached());

    // Cards inserted after discovery stay invisible to the engine, even if
    // attach is attempted again.
    page.cards.push(status_card("archived"));
    engine.attach(&page);
    engine.install(&page);

    engine.activate(&mut page, 1);
    assert_eq!(page.cards[3].display, Display::Shown);
    assert_eq!(visible_indices(&page), vec![0, 2, 3]);
}

#[test]
fn install_on_loading_page_defers_until_content_loaded() {
    let mut page = gallery_page();
    page.readiness = PageReadiness::Loading;

    let mut engine = FilterEngine::new();
    engine.install(&page);
    assert!(!engine.is_attached());

    // Activations before the content-loaded signal are no-ops.
    engine.activate(&mut page, 2);
    assert_eq!(visible_indices(&page), vec![0, 1, 2]);

    engine.content_loaded(&page);
    assert!(engine.is_attached());
    engine.activate(&mut page, 2);
    assert_eq!(visible_indices(&page), vec![1]);
}

#[test]
fn empty_page_is_a_valid_no_op_input() {
    let mut page = Page::new("Ideas");
    let mut engine = FilterEngine::new();
    engine.install(&page);

    engine.activate(&mut page, 0);
    assert_eq!(engine.state(), &FilterState::Unfiltered);
    assert!(page.cards.is_empty());
    assert!(page.controls.is_empty());
}
