//! Field-level merge of a partial update into an existing record.

use super::{BLOCK_SEPARATOR, is_blank};
use crate::domain::NoteComponents;

/// Merges `updates` into `existing`, returning a new record.
///
/// - Content: both present are joined with a blank line, existing first.
/// - Critical: the update wins when set and not blank; otherwise the
///   existing value is kept. Merge cannot clear it; use
///   [`super::clear_critical`].
/// - Links: ordered union, existing ids first.
///
/// # Examples
///
/// ```
/// use noteblob::codec::merge;
/// use noteblob::domain::NoteComponents;
///
/// let existing = NoteComponents::new().with_links(["A", "B"]);
/// let updates = NoteComponents::new().with_links(["B", "C"]);
/// let merged = merge(&existing, &updates);
/// assert_eq!(merged.links().unwrap().as_slice(), &["A", "B", "C"]);
/// ```
pub fn merge(existing: &NoteComponents, updates: &NoteComponents) -> NoteComponents {
    let content = match (existing.content(), updates.content()) {
        (Some(old), Some(new)) => Some(format!("{}{}{}", old, BLOCK_SEPARATOR, new)),
        (old, new) => old.or(new).map(str::to_string),
    };

    let critical = updates
        .critical()
        .filter(|critical| !is_blank(critical))
        .or(existing.critical())
        .map(str::to_string);

    let links = match (existing.links(), updates.links()) {
        (Some(old), Some(new)) => Some(old.union(new)),
        (old, new) => old.or(new).cloned(),
    };

    let mut merged = NoteComponents::new();
    merged.set_content(content);
    merged.set_critical(critical);
    merged.set_links(links);
    merged
}
