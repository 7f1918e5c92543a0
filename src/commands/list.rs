//! List posts, newest first

use anyhow::Result;
use std::io::Write;

use crate::Folio;

/// List posts, optionally only those tagged `tag`
pub fn run<W: Write>(folio: &Folio, tag: Option<&str>, json: bool, out: &mut W) -> Result<()> {
    let posts = folio.loader().sorted_posts(tag)?;
    tracing::info!("Listing {} posts", posts.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &posts)?;
        writeln!(out)?;
        return Ok(());
    }

    let helpers = folio.helpers();
    match tag {
        Some(tag) => writeln!(out, "Posts tagged '{}' ({}):", tag, posts.len())?,
        None => writeln!(out, "Posts ({}):", posts.len())?,
    }
    for post in &posts {
        writeln!(
            out,
            "  {} - {} [{}] ({})",
            helpers.date(&post.date, None),
            post.title,
            post.id,
            post.tags.join(", ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> (tempfile::TempDir, Folio) {
        let tmp = tempfile::TempDir::new().unwrap();
        let posts = tmp.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(
            posts.join("a.md"),
            "---\ntitle: First\ndate: 2024-01-01\ntags: x\n---\n",
        )
        .unwrap();
        fs::write(
            posts.join("b.md"),
            "---\ntitle: Second\ndate: 2024-02-01\ntags: [y, x]\n---\n",
        )
        .unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        (tmp, folio)
    }

    #[test]
    fn test_list_text() {
        let (_tmp, folio) = site();
        let mut out = Vec::new();
        run(&folio, None, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Posts (2):\n  February 1, 2024 - Second [b] (y, x)\n  January 1, 2024 - First [a] (x)\n"
        );
    }

    #[test]
    fn test_list_json_by_tag() {
        let (_tmp, folio) = site();
        let mut out = Vec::new();
        run(&folio, Some("y"), true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let posts = value.as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["id"], "b");
        assert_eq!(posts[0]["date"], "2024-02-01T00:00:00");
    }
}
