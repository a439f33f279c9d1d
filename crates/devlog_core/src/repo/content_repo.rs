//! Update/figure/material repository contract and SQLite implementation.
//!
//! One trait covers the three content-library tables; their fetch shapes are
//! identical (ordered list, keyed detail, admin delete).
//!
//! # Invariants
//! - Updates list by `published_at DESC`, figures by `figure_number ASC`,
//!   materials by `date DESC, slug ASC`.
//! - Unknown persisted figure statuses decode to the figure default.

use crate::model::{EntityKind, Figure, FigureStatus, Material, StatusVocabulary, Update};
use crate::repo::{load_tags, replace_tags, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the content-library tables.
pub trait ContentRepository {
    fn create_update(&self, update: &Update) -> RepoResult<()>;
    fn get_update(&self, slug: &str) -> RepoResult<Option<Update>>;
    /// Lists all updates ordered by `published_at DESC`.
    fn list_updates(&self) -> RepoResult<Vec<Update>>;
    fn delete_update(&self, slug: &str) -> RepoResult<()>;

    fn create_figure(&self, figure: &Figure) -> RepoResult<i64>;
    fn get_figure(&self, figure_number: i64) -> RepoResult<Option<Figure>>;
    /// Lists all figures ordered by `figure_number ASC`.
    fn list_figures(&self) -> RepoResult<Vec<Figure>>;
    fn delete_figure(&self, figure_number: i64) -> RepoResult<()>;

    fn create_material(&self, material: &Material) -> RepoResult<()>;
    fn get_material(&self, slug: &str) -> RepoResult<Option<Material>>;
    /// Lists all materials ordered by `date DESC, slug ASC`.
    fn list_materials(&self) -> RepoResult<Vec<Material>>;
    fn delete_material(&self, slug: &str) -> RepoResult<()>;
}

/// SQLite-backed content-library repository.
pub struct SqliteContentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContentRepository for SqliteContentRepository<'_> {
    fn create_update(&self, update: &Update) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO updates (slug, title, body, published_at) VALUES (?1, ?2, ?3, ?4);",
            params![
                update.slug.as_str(),
                update.title.as_str(),
                update.body.as_str(),
                update.published_at,
            ],
        )?;
        Ok(())
    }

    fn get_update(&self, slug: &str) -> RepoResult<Option<Update>> {
        let mut stmt = self.conn.prepare(
            "SELECT slug, title, body, published_at FROM updates WHERE slug = ?1;",
        )?;
        let mut rows = stmt.query([slug])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_update_row(row)?));
        }

        Ok(None)
    }

    fn list_updates(&self) -> RepoResult<Vec<Update>> {
        let mut stmt = self.conn.prepare(
            "SELECT slug, title, body, published_at FROM updates ORDER BY published_at DESC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut updates = Vec::new();

        while let Some(row) = rows.next()? {
            updates.push(parse_update_row(row)?);
        }

        Ok(updates)
    }

    fn delete_update(&self, slug: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM updates WHERE slug = ?1;", [slug])?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Update, slug));
        }

        Ok(())
    }

    fn create_figure(&self, figure: &Figure) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO figures (figure_number, title, description, image_path, alt_text, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                figure.figure_number,
                figure.title.as_str(),
                figure.description.as_str(),
                figure.image_path.as_str(),
                figure.alt_text.as_str(),
                figure.status.token(),
            ],
        )?;

        Ok(figure.figure_number)
    }

    fn get_figure(&self, figure_number: i64) -> RepoResult<Option<Figure>> {
        let mut stmt = self.conn.prepare(
            "SELECT figure_number, title, description, image_path, alt_text, status
             FROM figures WHERE figure_number = ?1;",
        )?;
        let mut rows = stmt.query([figure_number])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_figure_row(row)?));
        }

        Ok(None)
    }

    fn list_figures(&self) -> RepoResult<Vec<Figure>> {
        let mut stmt = self.conn.prepare(
            "SELECT figure_number, title, description, image_path, alt_text, status
             FROM figures ORDER BY figure_number ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut figures = Vec::new();

        while let Some(row) = rows.next()? {
            figures.push(parse_figure_row(row)?);
        }

        Ok(figures)
    }

    fn delete_figure(&self, figure_number: i64) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM figures WHERE figure_number = ?1;", [figure_number])?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Figure, figure_number));
        }

        Ok(())
    }

    fn create_material(&self, material: &Material) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO materials (slug, title, excerpt, author, date)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                material.slug.as_str(),
                material.title.as_str(),
                material.excerpt.as_str(),
                material.author.as_str(),
                material.date.as_str(),
            ],
        )?;

        let row_id = self.conn.last_insert_rowid();
        replace_tags(
            self.conn,
            "material_tags",
            "material_id",
            row_id,
            &material.tags,
        )?;

        Ok(())
    }

    fn get_material(&self, slug: &str) -> RepoResult<Option<Material>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, slug, title, excerpt, author, date FROM materials WHERE slug = ?1;",
        )?;
        let mut rows = stmt.query([slug])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_material_row(self.conn, row)?));
        }

        Ok(None)
    }

    fn list_materials(&self) -> RepoResult<Vec<Material>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, slug, title, excerpt, author, date
             FROM materials ORDER BY date DESC, slug ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut materials = Vec::new();

        while let Some(row) = rows.next()? {
            materials.push(parse_material_row(self.conn, row)?);
        }

        Ok(materials)
    }

    fn delete_material(&self, slug: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM materials WHERE slug = ?1;", [slug])?;

        if changed == 0 {
            return Err(RepoError::not_found(EntityKind::Material, slug));
        }

        Ok(())
    }
}

fn parse_update_row(row: &Row<'_>) -> RepoResult<Update> {
    Ok(Update {
        slug: row.get("slug")?,
        title: row.get("title")?,
        body: row.get("body")?,
        published_at: row.get("published_at")?,
    })
}

fn parse_figure_row(row: &Row<'_>) -> RepoResult<Figure> {
    let status_text: String = row.get("status")?;

    Ok(Figure {
        figure_number: row.get("figure_number")?,
        title: row.get("title")?,
        description: row.get("description")?,
        image_path: row.get("image_path")?,
        alt_text: row.get("alt_text")?,
        status: FigureStatus::from_token(&status_text),
    })
}

fn parse_material_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Material> {
    let row_id: i64 = row.get("id")?;

    Ok(Material {
        slug: row.get("slug")?,
        title: row.get("title")?,
        excerpt: row.get("excerpt")?,
        author: row.get("author")?,
        date: row.get("date")?,
        tags: load_tags(conn, "material_tags", "material_id", row_id)?,
    })
}
