//! List tags with their post counts

use anyhow::Result;
use std::io::Write;

use crate::Folio;

pub fn run<W: Write>(folio: &Folio, json: bool, out: &mut W) -> Result<()> {
    let tags = folio.loader().tags()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &tags)?;
        writeln!(out)?;
        return Ok(());
    }

    let helpers = folio.helpers();
    writeln!(out, "Tags ({}):", tags.len())?;
    for tag in &tags {
        writeln!(out, "  {} ({}) {}", tag.name, tag.count, helpers.tag_path(tag))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_tags_text() {
        let tmp = tempfile::TempDir::new().unwrap();
        let posts = tmp.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(
            posts.join("a.md"),
            "---\ntitle: A\ndate: 2024-01-01\ntags: Solutions Architecture, rust\n---\n",
        )
        .unwrap();
        fs::write(
            posts.join("b.md"),
            "---\ntitle: B\ndate: 2024-02-01\ntags: [rust]\n---\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        let mut out = Vec::new();
        run(&folio, false, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Tags (2):\n  rust (2) /tags/rust/\n  Solutions Architecture (1) /tags/solutions-architecture/\n"
        );
    }
}
