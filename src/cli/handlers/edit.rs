//! Mutating command handlers (normalize, merge, link, unlink, critical, uncritical).

use anyhow::{Result, bail};
use std::io::Write;
use tracing::{debug, warn};

use super::{emit_blob, load_blob};
use crate::cli::config::Config;
use crate::cli::{
    CriticalArgs, LinkArgs, MergeArgs, NormalizeArgs, TargetArgs, UncriticalArgs, UnlinkArgs,
};
use crate::codec::{NoteEdit, format, parse};
use crate::domain::NoteComponents;
use crate::infra::BlobSource;

/// Loads the target, applies `edits` in order, and emits the result.
fn apply_edits<W: Write>(
    target: &TargetArgs,
    config: &Config,
    edits: &[NoteEdit],
    out: &mut W,
) -> Result<()> {
    let (source, text) = load_blob(Some(target.file.as_path()), true)?;

    for edit in edits {
        debug!(%edit, "applying edit");
    }
    let updated = NoteEdit::apply_all(edits, text.as_deref());

    emit_blob(out, &source, &updated, in_place(target, config, &source))
}

fn in_place(target: &TargetArgs, config: &Config, source: &BlobSource) -> bool {
    // The config default only applies to real files; an explicit -i on stdin is an error
    target.in_place || (source.path().is_some() && config.in_place(false))
}

/// Flags values the text format cannot carry faithfully.
fn check_single_line(field: &str, value: &str) {
    if value.contains('\n') {
        warn!(field, "value spans several lines; only the first survives decoding");
    }
}

fn check_link_id(id: &str) {
    if id.contains(',') || id.contains('\n') {
        warn!(id, "related id contains a separator and will be split when decoded");
    }
}

pub fn handle_normalize<W: Write>(
    args: &NormalizeArgs,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let (source, text) = load_blob(Some(args.target.file.as_path()), false)?;
    let normalized = format(&parse(text.as_deref()));
    let in_place = in_place(&args.target, config, &source);
    emit_blob(out, &source, &normalized, in_place)
}

pub fn handle_merge<W: Write>(args: &MergeArgs, config: &Config, out: &mut W) -> Result<()> {
    if args.content.is_none() && args.critical.is_none() && args.links.is_empty() {
        bail!("merge requires at least one of --content, --critical, --link");
    }

    let mut updates = NoteComponents::new();
    if let Some(content) = &args.content {
        updates = updates.with_content(content.clone());
    }
    if let Some(critical) = &args.critical {
        check_single_line("critical", critical);
        updates = updates.with_critical(critical.clone());
    }
    for id in &args.links {
        check_link_id(id);
    }
    updates = updates.with_links(args.links.iter().cloned());

    apply_edits(&args.target, config, &[NoteEdit::Merge(updates)], out)
}

pub fn handle_link<W: Write>(args: &LinkArgs, config: &Config, out: &mut W) -> Result<()> {
    let edits: Vec<NoteEdit> = args
        .ids
        .iter()
        .inspect(|id| check_link_id(id))
        .map(|id| NoteEdit::AddLink(id.clone()))
        .collect();
    apply_edits(&args.target, config, &edits, out)
}

pub fn handle_unlink<W: Write>(args: &UnlinkArgs, config: &Config, out: &mut W) -> Result<()> {
    let edits: Vec<NoteEdit> = args
        .ids
        .iter()
        .map(|id| NoteEdit::RemoveLink(id.clone()))
        .collect();
    apply_edits(&args.target, config, &edits, out)
}

pub fn handle_critical<W: Write>(args: &CriticalArgs, config: &Config, out: &mut W) -> Result<()> {
    check_single_line("critical", &args.value);
    apply_edits(
        &args.target,
        config,
        &[NoteEdit::SetCritical(args.value.clone())],
        out,
    )
}

pub fn handle_uncritical<W: Write>(
    args: &UncriticalArgs,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    apply_edits(&args.target, config, &[NoteEdit::ClearCritical], out)
}
