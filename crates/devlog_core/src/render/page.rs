//! Structural page model.
//!
//! This is the render-side stand-in for the browser DOM: filter controls
//! carry a `data-filter` token, cards carry a class attribute set plus an
//! optional `data-status` attribute, and visibility is an inline display
//! style toggled between empty (shown) and `none` (hidden).

use serde::{Deserialize, Serialize};

/// Inline display state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    Shown,
    Hidden,
}

impl Display {
    /// Value of the inline `style` display property.
    pub fn as_style(&self) -> &'static str {
        match self {
            Self::Shown => "",
            Self::Hidden => "none",
        }
    }
}

/// One interactive filter control bound to a single filter token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControl {
    /// The `data-filter` token; either a status token or the sentinel `all`.
    pub filter_token: String,
    /// Whether this control carries the active marker class.
    pub active: bool,
}

impl FilterControl {
    pub fn new(filter_token: impl Into<String>) -> Self {
        Self {
            filter_token: filter_token.into(),
            active: false,
        }
    }
}

/// One rendered entity instance, filterable by its encoded status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Class attribute set; status is encoded as a `status-<token>` entry.
    pub classes: Vec<String>,
    /// Structured status attribute; preferred over class scanning when set.
    pub status_attr: Option<String>,
    /// Inline display state.
    pub display: Display,
    /// Pre-rendered inner HTML.
    pub body_html: String,
}

impl Card {
    pub fn new(classes: Vec<String>) -> Self {
        Self {
            classes,
            status_attr: None,
            display: Display::Shown,
            body_html: String::new(),
        }
    }

    /// Space-joined class attribute, as it appears in markup.
    pub fn class_attribute(&self) -> String {
        self.classes.join(" ")
    }
}

/// Visible page-level indicator rendered instead of (or above) cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// Fetch failed; carries the error's message.
    Error(String),
    /// Fetch succeeded with zero records; carries the "none found" text.
    Empty(String),
}

/// Document readiness at engine-install time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageReadiness {
    /// Content not parsed yet; attachment must wait for the loaded signal.
    Loading,
    /// Content present; attachment may happen immediately.
    Interactive,
}

/// One rendered page: zero or more filter controls, zero or more cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub readiness: PageReadiness,
    pub controls: Vec<FilterControl>,
    pub cards: Vec<Card>,
    pub notice: Option<Notice>,
}

impl Page {
    /// Creates an empty interactive page.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            readiness: PageReadiness::Interactive,
            controls: Vec::new(),
            cards: Vec::new(),
            notice: None,
        }
    }

    /// Renders the page to an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<section class=\"page\">\n");
        html.push_str(&format!("  <h1>{}</h1>\n", escape_html(&self.title)));

        if !self.controls.is_empty() {
            html.push_str("  <nav class=\"filters\">\n");
            for control in &self.controls {
                let active = if control.active { " active" } else { "" };
                html.push_str(&format!(
                    "    <button class=\"filter-btn{active}\" data-filter=\"{}\">{}</button>\n",
                    escape_html(&control.filter_token),
                    escape_html(&control.filter_token),
                ));
            }
            html.push_str("  </nav>\n");
        }

        match &self.notice {
            Some(Notice::Error(message)) => {
                html.push_str(&format!(
                    "  <p class=\"notice error\">{}</p>\n",
                    escape_html(message)
                ));
            }
            Some(Notice::Empty(message)) => {
                html.push_str(&format!(
                    "  <p class=\"notice empty\">{}</p>\n",
                    escape_html(message)
                ));
            }
            None => {}
        }

        for card in &self.cards {
            let mut attrs = format!("class=\"{}\"", escape_html(&card.class_attribute()));
            if let Some(status) = &card.status_attr {
                attrs.push_str(&format!(" data-status=\"{}\"", escape_html(status)));
            }
            if card.display == Display::Hidden {
                attrs.push_str(" style=\"display: none\"");
            }
            html.push_str(&format!("  <article {attrs}>{}</article>\n", card.body_html));
        }

        html.push_str("</section>\n");
        html
    }
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
