//! Command handlers for the CLI.

mod completions;
mod edit;
mod show;


use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::infra::{BlobSource, read_blob, write_blob};

// Re-export public items
pub use completions::handle_completions;
pub use edit::{
    handle_critical, handle_link, handle_merge, handle_normalize, handle_uncritical,
    handle_unlink,
};
pub use show::{handle_format, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Reads the blob named by a CLI `FILE` argument.
///
/// With `missing_ok`, a file that does not exist reads as absent text.
pub(crate) fn load_blob(
    file: Option<&Path>,
    missing_ok: bool,
) -> Result<(BlobSource, Option<String>)> {
    let source = BlobSource::from_arg(file);
    let text = read_blob(&source, missing_ok).with_context(|| match source.path() {
        Some(path) => format!("failed to read notes from {}", path.display()),
        None => "failed to read notes from stdin".to_string(),
    })?;
    debug!(?source, present = text.is_some(), "loaded notes text");
    Ok((source, text))
}

/// Writes mutated text back to its file, or prints it.
pub(crate) fn emit_blob<W: Write>(
    out: &mut W,
    source: &BlobSource,
    text: &str,
    in_place: bool,
) -> Result<()> {
    if in_place {
        let Some(path) = source.path() else {
            bail!("--in-place requires a notes file, not stdin");
        };
        write_blob(path, text)
            .with_context(|| format!("failed to write notes to {}", path.display()))?;
        debug!(path = %path.display(), "wrote notes text");
        return Ok(());
    }

    if !text.is_empty() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}
