//! Typed edits, as a request dispatcher hands them to the codec.

use super::{add_link, clear_critical, format, merge, parse, remove_link, set_critical};
use crate::domain::NoteComponents;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One update to a reminder's notes field.
///
/// A dispatcher decodes a tool invocation into a `NoteEdit`, fetches the
/// stored text, and calls [`NoteEdit::apply`] to get the text to write
/// back.
///
/// # Examples
///
/// ```
/// use noteblob::codec::NoteEdit;
///
/// let text = NoteEdit::AddLink("ABC".into()).apply(Some("Body"));
/// assert_eq!(text, "Body\n\nRelated:\nABC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum NoteEdit {
    /// Merge a partial record into the stored one.
    Merge(NoteComponents),
    AddLink(String),
    RemoveLink(String),
    SetCritical(String),
    ClearCritical,
}

impl NoteEdit {
    /// Applies the edit to the stored text and returns the new text.
    pub fn apply(&self, text: Option<&str>) -> String {
        match self {
            NoteEdit::Merge(updates) => format(&merge(&parse(text), updates)),
            NoteEdit::AddLink(id) => add_link(text, id),
            NoteEdit::RemoveLink(id) => remove_link(text, id),
            NoteEdit::SetCritical(value) => set_critical(text, value),
            NoteEdit::ClearCritical => clear_critical(text),
        }
    }

    /// Applies a sequence of edits in order.
    pub fn apply_all<'a, I>(edits: I, text: Option<&str>) -> String
    where
        I: IntoIterator<Item = &'a NoteEdit>,
    {
        let mut current = text.map(str::to_string);
        for edit in edits {
            current = Some(edit.apply(current.as_deref()));
        }
        current.unwrap_or_default()
    }
}

impl fmt::Display for NoteEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteEdit::Merge(_) => write!(f, "merge"),
            NoteEdit::AddLink(id) => write!(f, "add link {}", id),
            NoteEdit::RemoveLink(id) => write!(f, "remove link {}", id),
            NoteEdit::SetCritical(_) => write!(f, "set critical"),
            NoteEdit::ClearCritical => write!(f, "clear critical"),
        }
    }
}
