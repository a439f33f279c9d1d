//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `devlog_core` linkage.
//! - Render one seeded ideas page so the fetch-to-markup path stays
//!   exercisable without a browser.

use devlog_core::db::open_db_in_memory;
use devlog_core::model::{Idea, IdeaStatus};
use devlog_core::render::views::idea_list_page;
use devlog_core::repo::{IdeaRepository, SqliteIdeaRepository};

fn main() {
    println!("devlog_core version={}", devlog_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open demo database: {err}");
            std::process::exit(1);
        }
    };

    let repo = SqliteIdeaRepository::new(&conn);
    for (number, title, status) in [
        (1, "Offline-first notes", IdeaStatus::Active),
        (2, "Sprint burndown widget", IdeaStatus::Planned),
        (3, "Dark mode pass", IdeaStatus::Completed),
    ] {
        let mut idea = Idea::new(number, title);
        idea.status = status;
        if let Err(err) = repo.create_idea(&idea) {
            eprintln!("failed to seed idea {number}: {err}");
            std::process::exit(1);
        }
    }

    print!("{}", idea_list_page(&repo).to_html());
}
