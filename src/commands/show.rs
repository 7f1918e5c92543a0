//! Show a single post

use anyhow::Result;
use std::io::Write;

use crate::Folio;

/// Print one post, either its raw markdown body or rendered HTML
pub fn run<W: Write>(folio: &Folio, id: &str, html: bool, json: bool, out: &mut W) -> Result<()> {
    let loader = folio.loader();

    if html {
        let rendered = loader.render_post(id, &folio.renderer())?;
        if json {
            serde_json::to_writer_pretty(&mut *out, &rendered)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", rendered.content_html)?;
        }
        return Ok(());
    }

    let post = loader.post(id)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &post)?;
        writeln!(out)?;
        return Ok(());
    }

    let helpers = folio.helpers();
    writeln!(out, "{}", post.meta.title)?;
    writeln!(out, "{}", helpers.date(&post.meta.date, None))?;
    if !post.meta.tags.is_empty() {
        writeln!(out, "Tags: {}", post.meta.tags.join(", "))?;
    }
    writeln!(out)?;
    write!(out, "{}", post.content)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PostError;
    use std::fs;

    fn site() -> (tempfile::TempDir, Folio) {
        let tmp = tempfile::TempDir::new().unwrap();
        let posts = tmp.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(
            posts.join("hello.md"),
            "---\ntitle: Hello\ndate: 2024-01-01\ntags: [intro]\n---\n\n*Hi* there\n",
        )
        .unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        (tmp, folio)
    }

    #[test]
    fn test_show_raw() {
        let (_tmp, folio) = site();
        let mut out = Vec::new();
        run(&folio, "hello", false, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello\nJanuary 1, 2024\nTags: intro\n\n*Hi* there\n"
        );
    }

    #[test]
    fn test_show_html_json() {
        let (_tmp, folio) = site();
        let mut out = Vec::new();
        run(&folio, "hello", true, true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["title"], "Hello");
        assert_eq!(value["content"], "*Hi* there\n");
        assert_eq!(value["content_html"], "<p><em>Hi</em> there</p>\n");
        assert!(value["excerpt_html"].is_null());
    }

    #[test]
    fn test_show_missing_post() {
        let (_tmp, folio) = site();
        let err = run(&folio, "missing", false, false, &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PostError>(),
            Some(PostError::NotFound { .. })
        ));
    }
}
