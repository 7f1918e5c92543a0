//! Print every post id

use anyhow::Result;
use std::io::Write;

use crate::Folio;

pub fn run<W: Write>(folio: &Folio, out: &mut W) -> Result<()> {
    for id in folio.loader().list_post_ids()? {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}
