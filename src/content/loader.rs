//! Post loader - reads posts from a flat directory of markdown files
//!
//! The directory is the only source of truth: every query enumerates and
//! parses the files again, so results always match what is on disk.

use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post, PostMeta, RenderedPost, TagSummary};
use crate::error::{PostError, Result};

/// Extensions recognized when no others are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Loads posts from one directory
#[derive(Debug, Clone)]
pub struct PostLoader {
    posts_dir: PathBuf,
    extensions: Vec<String>,
}

/// A discovered post file and the id derived from its name
#[derive(Debug)]
struct PostFile {
    id: String,
    path: PathBuf,
}

impl PostLoader {
    /// Create a loader over `posts_dir`
    pub fn new<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the set of recognized extensions (leading dots and repeats are dropped)
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions: IndexSet<String> = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .collect();
        self.extensions = extensions.into_iter().collect();
        self
    }

    /// Directory the posts are read from
    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Ids of every post in the directory, in file-name order
    pub fn list_post_ids(&self) -> Result<Vec<String>> {
        Ok(self.discover()?.into_iter().map(|f| f.id).collect())
    }

    /// Front-matter of every post, in file-name order.
    ///
    /// The first malformed file aborts the whole listing.
    pub fn post_metadata(&self) -> Result<Vec<PostMeta>> {
        self.discover()?
            .iter()
            .map(|file| self.load(file).map(|post| post.meta))
            .collect()
    }

    /// Posts sorted by date descending (newest first), optionally only those
    /// tagged `tag`. Posts with the same date keep file-name order.
    pub fn sorted_posts(&self, tag: Option<&str>) -> Result<Vec<PostMeta>> {
        let mut posts = self.post_metadata()?;
        if let Some(tag) = tag {
            posts.retain(|p| p.has_tag(tag));
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            "Listed {} posts from {:?} (tag: {:?})",
            posts.len(),
            self.posts_dir,
            tag
        );
        Ok(posts)
    }

    /// Load a single post with its body
    pub fn post(&self, id: &str) -> Result<Post> {
        let file = self.resolve(id)?;
        self.load(&file)
    }

    /// Load a single post and render its body to HTML
    pub fn render_post(&self, id: &str, renderer: &MarkdownRenderer) -> Result<RenderedPost> {
        let post = self.post(id)?;

        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(&post.content);
        let content_html = renderer.render(&full_md);
        let excerpt_html = excerpt_md.as_deref().map(|e| renderer.render(e));

        Ok(RenderedPost {
            post,
            content_html,
            excerpt_html,
        })
    }

    /// Every distinct tag with its post count, most used first.
    /// Equal counts keep the order tags first appear in the sorted listing.
    pub fn tags(&self) -> Result<Vec<TagSummary>> {
        let posts = self.sorted_posts(None)?;

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for post in &posts {
            for tag in &post.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        let mut tags: Vec<TagSummary> = counts
            .into_iter()
            .map(|(name, count)| TagSummary::new(name, count))
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(tags)
    }

    /// Enumerate post files, failing on unreadable directories and id clashes
    fn discover(&self) -> Result<Vec<PostFile>> {
        self.check_dir()?;

        let mut files = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(&self.posts_dir).to_path_buf();
                    // Only the directory itself or a would-be post is fatal
                    if e.depth() == 0 || self.is_post_file(&path) {
                        return Err(PostError::io(path, io::Error::from(e)));
                    }
                    tracing::warn!("Skipping unreadable entry {:?}: {}", path, e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_post_file(path) {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("Skipping post with non UTF-8 file name: {:?}", path);
                continue;
            };

            if let Some(first) = seen.get(id) {
                return Err(PostError::DuplicateId {
                    id: id.to_string(),
                    first: first.clone(),
                    second: path.to_path_buf(),
                });
            }
            seen.insert(id.to_string(), path.to_path_buf());

            files.push(PostFile {
                id: id.to_string(),
                path: path.to_path_buf(),
            });
        }

        Ok(files)
    }

    /// Find the file backing `id`
    fn resolve(&self, id: &str) -> Result<PostFile> {
        self.check_dir()?;

        let not_found = || PostError::NotFound { id: id.to_string() };

        // Ids are bare file stems; anything that could escape the directory never matches
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(not_found());
        }

        let mut matches = self
            .extensions
            .iter()
            .map(|ext| self.posts_dir.join(format!("{}.{}", id, ext)))
            .filter(|path| path.is_file());

        let path = matches.next().ok_or_else(not_found)?;
        if let Some(second) = matches.next() {
            return Err(PostError::DuplicateId {
                id: id.to_string(),
                first: path,
                second,
            });
        }

        Ok(PostFile {
            id: id.to_string(),
            path,
        })
    }

    /// Read and parse one post file
    fn load(&self, file: &PostFile) -> Result<Post> {
        let raw = fs::read_to_string(&file.path).map_err(|e| PostError::io(&file.path, e))?;
        let (fm, body) =
            FrontMatter::parse(&raw).map_err(|e| PostError::parse(&file.path, e.to_string()))?;

        tracing::debug!("Parsed post {:?} from {:?}", file.id, file.path);

        Ok(Post {
            meta: PostMeta {
                id: file.id.clone(),
                title: fm.title,
                date: fm.date,
                tags: fm.tags,
            },
            content: body.to_string(),
        })
    }

    fn check_dir(&self) -> Result<()> {
        let metadata =
            fs::metadata(&self.posts_dir).map_err(|e| PostError::io(&self.posts_dir, e))?;
        if !metadata.is_dir() {
            return Err(PostError::io(
                &self.posts_dir,
                io::Error::new(io::ErrorKind::Other, "not a directory"),
            ));
        }
        Ok(())
    }

    /// Check if a file has one of the recognized extensions
    fn is_post_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|ext| ext == e))
            .unwrap_or(false)
    }
}
