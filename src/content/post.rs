//! Post models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Listing view of a post: everything except the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// File name without extension
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDateTime,

    /// Post tags, in the order written
    pub tags: Vec<String>,
}

impl PostMeta {
    /// Whether the post carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A full post: metadata plus the raw markdown body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,

    /// Raw markdown content (front-matter removed)
    pub content: String,
}

impl Post {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }
}

/// A post with its body rendered to HTML
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPost {
    #[serde(flatten)]
    pub post: Post,

    /// Rendered HTML content
    pub content_html: String,

    /// Rendered excerpt (before <!-- more -->)
    pub excerpt_html: Option<String>,
}

/// A tag and the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl TagSummary {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            slug: slug::slugify(name),
            count,
        }
    }

    /// Site-relative path of the tag's listing page
    pub fn path(&self, root: &str, tag_dir: &str) -> String {
        format!(
            "{}/{}/{}/",
            root.trim_end_matches('/'),
            tag_dir.trim_matches('/'),
            self.slug
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn meta() -> PostMeta {
        PostMeta {
            id: "hello".to_string(),
            title: "Hello".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            tags: vec!["Rust".to_string(), "web".to_string()],
        }
    }

    #[test]
    fn test_has_tag_is_exact() {
        let meta = meta();
        assert!(meta.has_tag("Rust"));
        assert!(meta.has_tag("web"));
        assert!(!meta.has_tag("rust"));
        assert!(!meta.has_tag("we"));
    }

    #[test]
    fn test_post_serializes_flat() {
        let post = Post {
            meta: meta(),
            content: "Body".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], "hello");
        assert_eq!(json["date"], "2024-01-01T00:00:00");
        assert_eq!(json["content"], "Body");
    }

    #[test]
    fn test_tag_summary_path() {
        let tag = TagSummary::new("Software Architecture", 2);
        assert_eq!(tag.slug, "software-architecture");
        assert_eq!(tag.path("/", "tags"), "/tags/software-architecture/");
        assert_eq!(tag.path("/blog/", "/tags/"), "/blog/tags/software-architecture/");
    }
}
