//! Show and Format command handlers.

use anyhow::{Context, Result};
use std::io::Write;

use super::load_blob;
use crate::cli::config::Config;
use crate::cli::output::OutputFormat;
use crate::cli::{FormatArgs, ShowArgs};
use crate::codec::{format, parse};
use crate::domain::NoteComponents;

pub fn handle_show<W: Write>(args: &ShowArgs, config: &Config, out: &mut W) -> Result<()> {
    let (_, text) = load_blob(args.file.as_deref(), false)?;
    let note = parse(text.as_deref());

    match config.format(args.format) {
        OutputFormat::Human => write_human(out, &note)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?,
        OutputFormat::Text => {
            let encoded = format(&note);
            if !encoded.is_empty() {
                writeln!(out, "{}", encoded)?;
            }
        }
    }
    Ok(())
}

fn write_human<W: Write>(out: &mut W, note: &NoteComponents) -> Result<()> {
    if note.is_empty() {
        writeln!(out, "(empty)")?;
        return Ok(());
    }

    if let Some(critical) = note.critical() {
        writeln!(out, "Critical: {}", critical)?;
    }

    if let Some(links) = note.links() {
        writeln!(out, "Related:  {}", links)?;
    }

    if let Some(content) = note.content() {
        if note.critical().is_some() || note.links().is_some() {
            writeln!(out)?;
        }
        writeln!(out, "{}", content)?;
    }
    Ok(())
}

pub fn handle_format<W: Write>(args: &FormatArgs, out: &mut W) -> Result<()> {
    let (_, text) = load_blob(args.file.as_deref(), false)?;
    let json = text.unwrap_or_default();

    let note: NoteComponents = if json.trim().is_empty() {
        NoteComponents::new()
    } else {
        serde_json::from_str(&json).context("input is not a valid notes record")?
    };

    let encoded = format(&note);
    if !encoded.is_empty() {
        writeln!(out, "{}", encoded)?;
    }
    Ok(())
}
