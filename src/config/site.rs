//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::loader::DEFAULT_EXTENSIONS;

/// Name of the configuration file in the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub posts_dir: String,
    pub tag_dir: String,

    // Writing
    pub extensions: Vec<String>,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Date format (Moment.js tokens)
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            posts_dir: "posts".to_string(),
            tag_dir: "tags".to_string(),

            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            highlight: HighlightConfig::default(),

            date_format: "MMMM D, YYYY".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load `_config.yml` from `base_dir`, or defaults when there is none
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub line_number: bool,
    /// syntect theme name
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            line_number: true,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.extensions, vec!["md", "markdown"]);
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Vinicius
posts_dir: content/posts
extensions: [md]
highlight:
  line_number: false
unknown_key: ignored
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Vinicius");
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.extensions, vec!["md"]);
        assert!(config.highlight.enable);
        assert!(!config.highlight.line_number);
        assert_eq!(config.tag_dir, "tags");
    }

    #[test]
    fn test_load_or_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = SiteConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.title, "Blog");

        fs::write(tmp.path().join(CONFIG_FILE), "title: [unclosed").unwrap();
        let err = SiteConfig::load_or_default(tmp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }
}
