//! Point mutators over raw notes-field text.
//!
//! Each one decodes the text, changes a single field, and encodes the
//! result. Absent text is treated as an empty record.

use super::{format, parse};
use crate::domain::NoteComponents;

fn rewrite(text: Option<&str>, transform: impl FnOnce(&mut NoteComponents)) -> String {
    let mut note = parse(text);
    transform(&mut note);
    format(&note)
}

/// Adds `id` to the related ids. Adding an id already present changes
/// nothing.
pub fn add_link(text: Option<&str>, id: &str) -> String {
    rewrite(text, |note| {
        note.links_mut().insert(id);
    })
}

/// Removes `id` from the related ids. Removing the last id drops the
/// `Related:` block entirely.
pub fn remove_link(text: Option<&str>, id: &str) -> String {
    rewrite(text, |note| {
        let mut links = note.links().cloned().unwrap_or_default();
        links.remove(id);
        note.set_links(Some(links));
    })
}

/// Replaces the critical annotation.
pub fn set_critical(text: Option<&str>, value: &str) -> String {
    rewrite(text, |note| note.set_critical(Some(value.to_string())))
}

/// Drops the critical annotation.
pub fn clear_critical(text: Option<&str>) -> String {
    rewrite(text, |note| note.set_critical(None))
}
