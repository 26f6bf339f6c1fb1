//! Encoder: NoteComponents to text.

use super::{BLOCK_SEPARATOR, CRITICAL_HEADER, LINK_SEPARATOR, RELATED_HEADER, is_blank};
use crate::domain::NoteComponents;

/// Encodes a record into the notes-field text.
///
/// Content is emitted verbatim, followed by a `Critical:` block and a
/// `Related:` block when those fields are set. Absent fields produce no
/// block at all, so an empty record encodes to the empty string. A blank
/// critical value or blank id is treated as absent, so a header is never
/// written without a payload.
///
/// Values are not escaped. A content line that reads exactly `Critical:`
/// will be taken for a header when the text is parsed again.
///
/// # Examples
///
/// ```
/// use noteblob::codec::format;
/// use noteblob::domain::NoteComponents;
///
/// let note = NoteComponents::new()
///     .with_content("Body")
///     .with_links(["A", "B"]);
/// assert_eq!(format(&note), "Body\n\nRelated:\nA, B");
/// ```
pub fn format(note: &NoteComponents) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(3);

    if let Some(content) = note.content() {
        blocks.push(content.to_string());
    }

    if let Some(critical) = note.critical().filter(|critical| !is_blank(critical)) {
        blocks.push(format!("{}\n{}", CRITICAL_HEADER, critical));
    }

    let ids: Vec<&str> = note
        .links()
        .into_iter()
        .flatten()
        .map(String::as_str)
        .filter(|id| !is_blank(id))
        .collect();
    if !ids.is_empty() {
        blocks.push(format!("{}\n{}", RELATED_HEADER, ids.join(LINK_SEPARATOR)));
    }

    blocks.join(BLOCK_SEPARATOR).trim().to_string()
}
