//! Decoder: notes-field text to NoteComponents.

use super::{CRITICAL_HEADER, RELATED_HEADER};
use crate::domain::{LinkSet, NoteComponents};
use tracing::trace;

/// What the next non-blank line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Content,
    Critical,
    Related,
}

/// Decodes notes-field text into a record.
///
/// Runs a line-oriented state machine over the text:
///
/// - Blank lines are skipped and never change state.
/// - A line exactly equal to `Critical:` or `Related:` switches state and
///   is not kept as content.
/// - After a header, the next non-blank line is captured (trimmed for the
///   critical value, split on commas for related ids) and the machine goes
///   back to collecting content. Only one line is ever captured.
/// - Any other line is content, wherever it appears.
///
/// A header with nothing after it leaves its field absent. Absent or empty
/// input yields an empty record. Decoding never fails.
///
/// # Examples
///
/// ```
/// use noteblob::codec::parse;
///
/// let note = parse(Some("Body\n\nRelated:\nABC , DEF , GHI"));
/// assert_eq!(note.content(), Some("Body"));
/// assert_eq!(note.links().unwrap().as_slice(), &["ABC", "DEF", "GHI"]);
/// ```
pub fn parse(text: Option<&str>) -> NoteComponents {
    let mut note = NoteComponents::new();
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return note;
    };

    let mut state = State::Content;
    let mut content_lines: Vec<&str> = Vec::new();
    let mut links = LinkSet::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }

        if line == CRITICAL_HEADER {
            state = State::Critical;
            continue;
        }

        if line == RELATED_HEADER {
            state = State::Related;
            continue;
        }

        match state {
            State::Content => content_lines.push(line),
            State::Critical => {
                note.set_critical(Some(line.trim().to_string()));
                state = State::Content;
            }
            State::Related => {
                links.extend(
                    line.split(',')
                        .map(str::trim)
                        .filter(|token| !token.is_empty()),
                );
                state = State::Content;
            }
        }
    }

    if state != State::Content {
        trace!(?state, "section header without a value line");
    }

    if !content_lines.is_empty() {
        note.set_content(Some(content_lines.join("\n")));
    }
    note.set_links(Some(links));

    note
}
