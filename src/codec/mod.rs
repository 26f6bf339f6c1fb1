//! Note codec: packs content, a critical annotation, and related ids into
//! one plain-text field and reads them back.
//!
//! # Format
//! ```text
//! Free text, possibly
//! spanning several lines
//!
//! Critical:
//! Blocking release
//!
//! Related:
//! ABC123, DEF456
//! ```
//!
//! Each block is optional. Blocks are separated by one blank line and the
//! whole text is trimmed. None of these functions can fail: text that does
//! not follow the convention decodes to a best-effort record.

mod edit;
mod format;
mod merge;
mod mutate;
mod parse;

pub use edit::NoteEdit;
pub use format::format;
pub use merge::merge;
pub use mutate::{add_link, clear_critical, remove_link, set_critical};
pub use parse::parse;

/// Header line introducing the critical annotation.
pub const CRITICAL_HEADER: &str = "Critical:";

/// Header line introducing the related-id list.
pub const RELATED_HEADER: &str = "Related:";

/// Separator between blocks.
pub(crate) const BLOCK_SEPARATOR: &str = "\n\n";

/// Separator between ids on the related line.
pub(crate) const LINK_SEPARATOR: &str = ", ";

/// A whitespace-only value never survives decoding, so it counts as absent.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
