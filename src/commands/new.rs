//! Create a new post

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::Folio;

#[derive(Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    date: String,
    tags: &'a [String],
}

/// Write a new post with valid front-matter dated now.
/// The id defaults to the slugified title. Returns the created file.
pub fn create_post(
    folio: &Folio,
    title: &str,
    tags: &[String],
    id: Option<&str>,
) -> Result<PathBuf> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Post title must not be empty");
    }

    let id = match id {
        Some(id) => id.to_string(),
        None => slug::slugify(title),
    };
    if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
        bail!("Invalid post id: {:?}", id);
    }

    let extension = folio
        .config
        .extensions
        .first()
        .map(|e| e.trim_start_matches('.'))
        .unwrap_or("md");

    // An id must stay unique across every recognized extension
    for ext in &folio.config.extensions {
        let existing = folio
            .posts_dir
            .join(format!("{}.{}", id, ext.trim_start_matches('.')));
        if existing.exists() {
            bail!("Post already exists: {:?}", existing);
        }
    }

    fs::create_dir_all(&folio.posts_dir)
        .with_context(|| format!("Failed to create {:?}", folio.posts_dir))?;

    let tags: Vec<String> = tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    let scaffold = Scaffold {
        title,
        date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        tags: &tags,
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&scaffold)?);

    let file_path = folio.posts_dir.join(format!("{}.{}", id, extension));
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
        .with_context(|| format!("Failed to create {:?}", file_path))?;
    file.write_all(content.as_bytes())?;

    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}
