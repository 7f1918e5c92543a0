//! folio: markdown post loader for a personal portfolio blog
//!
//! Posts live as markdown files with a front-matter header in a single flat
//! directory. This crate enumerates them, validates their metadata, lists
//! them by date (optionally by tag) and renders their bodies to HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

pub use content::{Post, PostLoader, PostMeta, RenderedPost, TagSummary};
pub use error::PostError;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Folio {
    /// Open a site, reading `_config.yml` from `base_dir` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load_or_default(&base_dir)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an already loaded configuration
    pub fn with_config<P: Into<PathBuf>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.into();
        let posts_dir = base_dir.join(&config.posts_dir);
        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Loader over this site's posts directory
    pub fn loader(&self) -> PostLoader {
        PostLoader::new(&self.posts_dir).with_extensions(self.config.extensions.iter().cloned())
    }

    /// Markdown renderer using this site's highlight settings
    pub fn renderer(&self) -> content::MarkdownRenderer {
        content::MarkdownRenderer::from_config(&self.config.highlight)
    }

    /// Display helpers bound to this site's configuration
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_folio_uses_configured_posts_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "posts_dir: content\nextensions: [md]\n",
        )
        .unwrap();
        fs::create_dir(tmp.path().join("content")).unwrap();
        fs::write(
            tmp.path().join("content/hello.md"),
            "---\ntitle: Hello\ndate: 2024-01-01\ntags: x\n---\nHi\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("content/ignored.markdown"),
            "---\ntitle: Ignored\ndate: 2024-01-01\ntags: x\n---\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.posts_dir, tmp.path().join("content"));
        assert_eq!(folio.loader().list_post_ids().unwrap(), vec!["hello"]);
    }

    #[test]
    fn test_folio_defaults_without_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.posts_dir, tmp.path().join("posts"));
        assert!(matches!(
            folio.loader().list_post_ids().unwrap_err(),
            PostError::Io { .. }
        ));
    }
}
