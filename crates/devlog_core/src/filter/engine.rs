//! Status filter engine.
//!
//! # Responsibility
//! - Discover filter controls and cards once, at page-ready time.
//! - On each activation, transition the selection state and recompute the
//!   visible card subset from markup alone.
//!
//! # Invariants
//! - Exactly one control carries the active marker after any activation.
//! - A card with no extractable status token is hidden under any concrete
//!   filter.
//! - Elements added after attachment are not re-discovered.

use crate::render::page::{Card, Display, Page, PageReadiness};
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel filter token meaning "no filtering, show every card".
pub const ALL_TOKEN: &str = "all";

// First dash-prefixed word in the class attribute names the status. This is
// substring matching, not an exact-field lookup, so incidental class-name
// collisions are part of the observable contract; `data-status` takes
// precedence when present.
static STATUS_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([\w-]+)").expect("status token pattern is valid"));

/// Selection state of one page instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterState {
    /// No filtering; every card shown.
    Unfiltered,
    /// Only cards whose status token equals the carried token are shown.
    FilteredBy(String),
}

impl FilterState {
    /// Pure transition function: activating a control bound to `token`.
    pub fn next(token: &str) -> Self {
        if token == ALL_TOKEN {
            Self::Unfiltered
        } else {
            Self::FilteredBy(token.to_string())
        }
    }
}

/// Per-page filter engine instance.
///
/// Lives for the lifetime of the page; there is no terminal state. All
/// operations are total over the discovered element sets, including the
/// empty set.
#[derive(Debug)]
pub struct FilterEngine {
    state: FilterState,
    attached: bool,
    attach_deferred: bool,
    control_count: usize,
    card_count: usize,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {
            state: FilterState::Unfiltered,
            attached: false,
            attach_deferred: false,
            control_count: 0,
            card_count: 0,
        }
    }

    /// Current selection state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Whether discovery has run.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Installs the engine at page-ready time.
    ///
    /// Attaches immediately when the page is already interactive; otherwise
    /// attachment is deferred until [`content_loaded`] fires, so elements are
    /// guaranteed to exist before discovery.
    ///
    /// [`content_loaded`]: FilterEngine::content_loaded
    pub fn install(&mut self, page: &Page) {
        match page.readiness {
            PageReadiness::Interactive => self.attach(page),
            PageReadiness::Loading => self.attach_deferred = true,
        }
    }

    /// Handles the page's content-loaded signal for deferred installs.
    pub fn content_loaded(&mut self, page: &Page) {
        if self.attach_deferred {
            self.attach_deferred = false;
            self.attach(page);
        }
    }

    /// One-shot discovery of controls and cards.
    ///
    /// Guarded: running it a second time is a no-op, so listeners can never
    /// be double-attached. Elements inserted after this snapshot stay
    /// invisible to the engine.
    pub fn attach(&mut self, page: &Page) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.control_count = page.controls.len();
        self.card_count = page.cards.len();
    }

    /// Activation of the control at `control_index`.
    ///
    /// Synchronous start-to-finish: state transition plus full visibility
    /// recomputation. No-op when the engine is unattached or the index lies
    /// outside the discovered snapshot.
    pub fn activate(&mut self, page: &mut Page, control_index: usize) {
        if !self.attached {
            return;
        }

        let control_count = self.control_count.min(page.controls.len());
        if control_index >= control_count {
            return;
        }

        let token = page.controls[control_index].filter_token.clone();
        self.state = FilterState::next(&token);

        // Clear the active marker everywhere before marking the activated
        // control; exactly one control stays active.
        for (index, control) in page.controls[..control_count].iter_mut().enumerate() {
            control.active = index == control_index;
        }

        let card_count = self.card_count.min(page.cards.len());
        for card in &mut page.cards[..card_count] {
            card.display = card_visibility(card, &self.state);
        }
    }
}

/// Computes one card's visibility under the given selection state.
pub fn card_visibility(card: &Card, state: &FilterState) -> Display {
    match state {
        FilterState::Unfiltered => Display::Shown,
        FilterState::FilteredBy(token) => match extract_status_token(card) {
            Some(status) if status == *token => Display::Shown,
            _ => Display::Hidden,
        },
    }
}

/// Extracts a card's status token.
///
/// The structured `data-status` attribute wins when present; otherwise the
/// first dash-prefixed word found in the space-joined class attribute is
/// used. Returns `None` when neither yields a token.
pub fn extract_status_token(card: &Card) -> Option<String> {
    if let Some(status) = &card.status_attr {
        return Some(status.clone());
    }

    let class_attribute = card.class_attribute();
    STATUS_TOKEN
        .captures(&class_attribute)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::{card_visibility, extract_status_token, Display, FilterState};
    use crate::render::page::Card;

    fn card_with_classes(classes: &[&str]) -> Card {
        Card::new(classes.iter().map(|class| class.to_string()).collect())
    }

    #[test]
    fn next_state_maps_sentinel_to_unfiltered() {
        assert_eq!(FilterState::next("all"), FilterState::Unfiltered);
        assert_eq!(
            FilterState::next("active"),
            FilterState::FilteredBy("active".to_string())
        );
    }

    #[test]
    fn first_dash_prefixed_class_token_wins() {
        let card = card_with_classes(&["card", "status-active", "status-archived"]);
        assert_eq!(extract_status_token(&card), Some("active".to_string()));
    }

    #[test]
    fn data_status_takes_precedence_over_classes() {
        let mut card = card_with_classes(&["card", "status-archived"]);
        card.status_attr = Some("active".to_string());
        assert_eq!(extract_status_token(&card), Some("active".to_string()));
    }

    #[test]
    fn card_without_token_is_hidden_under_concrete_filter() {
        let card = card_with_classes(&["card"]);
        assert_eq!(extract_status_token(&card), None);
        assert_eq!(
            card_visibility(&card, &FilterState::FilteredBy("active".to_string())),
            Display::Hidden
        );
        assert_eq!(
            card_visibility(&card, &FilterState::Unfiltered),
            Display::Shown
        );
    }

    #[test]
    fn class_name_collisions_are_part_of_the_contract() {
        // A non-status dash-prefixed class shadows the real status token.
        let card = card_with_classes(&["feature-card", "status-active"]);
        assert_eq!(extract_status_token(&card), Some("card".to_string()));
    }
}
