//! List and detail page builders, one pair per entity table.
//!
//! Builders are generic over the repository traits so tests can inject
//! failing stores. Fetch errors never escape as `Err`: they become a visible
//! error notice on the page, and filter controls are still emitted so the
//! engine attaches safely over the empty card set.

use crate::filter::engine::ALL_TOKEN;
use crate::model::{
    Figure, FigureStatus, Idea, IdeaStatus, Material, Sprint, SprintId, SprintStatus,
    StatusVocabulary, Story, StoryStatus, Update,
};
use crate::render::page::{escape_html, Card, FilterControl, Notice, Page};
use crate::repo::{ContentRepository, IdeaRepository, RepoResult, SprintRepository, StoryRepository};

/// Outcome of a detail-page build.
///
/// A missing record is a navigation outcome (`NotFound`), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(Page),
    NotFound,
    Failed(String),
}

/// Builds the ideas list page, ordered by `idea_number ASC`.
pub fn idea_list_page(repo: &impl IdeaRepository) -> Page {
    list_page(
        "Ideas",
        "No ideas found.",
        Some(controls_for::<IdeaStatus>()),
        repo.list_ideas(),
        idea_card,
    )
}

/// Builds one idea detail page by display key.
pub fn idea_detail_page(repo: &impl IdeaRepository, idea_number: i64) -> DetailOutcome {
    detail_page("Idea", repo.get_idea(idea_number), idea_card)
}

/// Builds the stories list page, ordered by `story_number ASC`.
pub fn story_list_page(repo: &impl StoryRepository) -> Page {
    list_page(
        "Stories",
        "No stories found.",
        Some(controls_for::<StoryStatus>()),
        repo.list_stories(),
        story_card,
    )
}

/// Builds one story detail page by display key.
pub fn story_detail_page(repo: &impl StoryRepository, story_number: i64) -> DetailOutcome {
    detail_page("Story", repo.get_story(story_number), story_card)
}

/// Builds the sprints list page, newest first.
pub fn sprint_list_page(repo: &impl SprintRepository) -> Page {
    list_page(
        "Sprints",
        "No sprints found.",
        Some(controls_for::<SprintStatus>()),
        repo.list_sprints(),
        sprint_card,
    )
}

/// Builds one sprint detail page by stable id.
pub fn sprint_detail_page(repo: &impl SprintRepository, sprint_id: SprintId) -> DetailOutcome {
    detail_page("Sprint", repo.get_sprint(sprint_id), sprint_card)
}

/// Builds the updates list page, newest first. No filter controls: updates
/// carry no status vocabulary.
pub fn update_list_page(repo: &impl ContentRepository) -> Page {
    list_page(
        "Updates",
        "No updates found.",
        None,
        repo.list_updates(),
        update_card,
    )
}

/// Builds one update detail page by slug.
pub fn update_detail_page(repo: &impl ContentRepository, slug: &str) -> DetailOutcome {
    detail_page("Update", repo.get_update(slug), update_card)
}

/// Builds the figures list page, ordered by `figure_number ASC`.
pub fn figure_list_page(repo: &impl ContentRepository) -> Page {
    list_page(
        "Figures",
        "No figures found.",
        Some(controls_for::<FigureStatus>()),
        repo.list_figures(),
        figure_card,
    )
}

/// Builds one figure detail page by display key.
pub fn figure_detail_page(repo: &impl ContentRepository, figure_number: i64) -> DetailOutcome {
    detail_page("Figure", repo.get_figure(figure_number), figure_card)
}

/// Builds the materials list page, newest first. No filter controls.
pub fn material_list_page(repo: &impl ContentRepository) -> Page {
    list_page(
        "Materials",
        "No materials found.",
        None,
        repo.list_materials(),
        material_card,
    )
}

/// Builds one material detail page by slug.
pub fn material_detail_page(repo: &impl ContentRepository, slug: &str) -> DetailOutcome {
    detail_page("Material", repo.get_material(slug), material_card)
}

/// Emits one control per vocabulary entry plus the sentinel `all`, which
/// starts as the single active control.
fn controls_for<S: StatusVocabulary>() -> Vec<FilterControl> {
    let mut controls = Vec::with_capacity(S::ALL.len() + 1);
    let mut all = FilterControl::new(ALL_TOKEN);
    all.active = true;
    controls.push(all);
    for status in S::ALL {
        controls.push(FilterControl::new(status.token()));
    }
    controls
}

fn list_page<T>(
    title: &str,
    empty_message: &str,
    controls: Option<Vec<FilterControl>>,
    fetched: RepoResult<Vec<T>>,
    to_card: impl Fn(&T) -> Card,
) -> Page {
    let mut page = Page::new(title);
    if let Some(controls) = controls {
        page.controls = controls;
    }

    match fetched {
        Err(err) => {
            page.notice = Some(Notice::Error(err.to_string()));
        }
        Ok(records) if records.is_empty() => {
            page.notice = Some(Notice::Empty(empty_message.to_string()));
        }
        Ok(records) => {
            page.cards = records.iter().map(to_card).collect();
        }
    }

    page
}

fn detail_page<T>(
    title: &str,
    fetched: RepoResult<Option<T>>,
    to_card: impl Fn(&T) -> Card,
) -> DetailOutcome {
    match fetched {
        Err(err) => DetailOutcome::Failed(err.to_string()),
        Ok(None) => DetailOutcome::NotFound,
        Ok(Some(record)) => {
            let mut page = Page::new(title);
            page.cards.push(to_card(&record));
            DetailOutcome::Found(page)
        }
    }
}

fn status_card<S: StatusVocabulary>(status: S, body_html: String) -> Card {
    let mut card = Card::new(vec!["card".to_string(), status.css_class()]);
    card.status_attr = Some(status.token().to_string());
    card.body_html = body_html;
    card
}

fn plain_card(body_html: String) -> Card {
    let mut card = Card::new(vec!["card".to_string()]);
    card.body_html = body_html;
    card
}

fn idea_card(idea: &Idea) -> Card {
    let tags = idea
        .tags
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape_html(tag)))
        .collect::<Vec<_>>()
        .join(" ");
    status_card(
        idea.status,
        format!(
            "<h2>#{} {}</h2><p>{}</p>{tags}",
            idea.idea_number,
            escape_html(&idea.title),
            escape_html(&idea.description),
        ),
    )
}

fn story_card(story: &Story) -> Card {
    status_card(
        story.status,
        format!(
            "<h2>#{} {}</h2><p>{}</p><span class=\"priority\">{}</span>",
            story.story_number,
            escape_html(&story.title),
            escape_html(&story.description),
            story.priority.as_str(),
        ),
    )
}

fn sprint_card(sprint: &Sprint) -> Card {
    let goals = sprint
        .goals
        .iter()
        .map(|goal| format!("<li>{}</li>", escape_html(goal)))
        .collect::<Vec<_>>()
        .join("");
    status_card(
        sprint.status,
        format!(
            "<h2>Sprint {} / {}</h2><p>{} to {}</p><ul>{goals}</ul>",
            sprint.sprint_number,
            sprint.year,
            escape_html(&sprint.start_date),
            escape_html(&sprint.end_date),
        ),
    )
}

fn update_card(update: &Update) -> Card {
    plain_card(format!(
        "<h2>{}</h2><div>{}</div>",
        escape_html(&update.title),
        escape_html(&update.body),
    ))
}

fn figure_card(figure: &Figure) -> Card {
    status_card(
        figure.status,
        format!(
            "<h2>#{} {}</h2><img src=\"{}\" alt=\"{}\"><p>{}</p>",
            figure.figure_number,
            escape_html(&figure.title),
            escape_html(&figure.image_path),
            escape_html(&figure.alt_text),
            escape_html(&figure.description),
        ),
    )
}

fn material_card(material: &Material) -> Card {
    plain_card(format!(
        "<h2>{}</h2><p>{}</p><span class=\"byline\">{}, {}</span>",
        escape_html(&material.title),
        escape_html(&material.excerpt),
        escape_html(&material.author),
        escape_html(&material.date),
    ))
}
