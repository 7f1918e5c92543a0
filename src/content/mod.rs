//! Content module - handles posts, front-matter and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{parse_date_string, FrontMatter, FrontMatterError};
pub use loader::PostLoader;
pub use markdown::{MarkdownRenderer, MORE_MARKER};
pub use post::{Post, PostMeta, RenderedPost, TagSummary};
