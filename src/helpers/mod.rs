//! Display helpers for post listings

mod date;

pub use date::*;

use chrono::NaiveDateTime;

use crate::config::SiteConfig;
use crate::content::TagSummary;

/// Helpers bound to a site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Format a date, using the site's `date_format` when none is given
    pub fn date(&self, date: &NaiveDateTime, format: Option<&str>) -> String {
        format_date(date, format.unwrap_or(&self.config.date_format))
    }

    /// Site-relative URL of a post
    pub fn post_path(&self, id: &str) -> String {
        format!("{}/posts/{}/", self.config.root.trim_end_matches('/'), id)
    }

    /// Site-relative URL of a tag's listing page
    pub fn tag_path(&self, tag: &TagSummary) -> String {
        tag.path(&self.config.root, &self.config.tag_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_helpers_use_site_config() {
        let config = SiteConfig {
            root: "/blog/".to_string(),
            ..Default::default()
        };
        let helpers = Helpers::new(config);
        let date = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(helpers.date(&date, None), "January 5, 2024");
        assert_eq!(helpers.date(&date, Some("YYYY/MM/DD")), "2024/01/05");
        assert_eq!(helpers.post_path("hello"), "/blog/posts/hello/");
        assert_eq!(
            helpers.tag_path(&TagSummary::new("Rust", 1)),
            "/blog/tags/rust/"
        );
    }
}
