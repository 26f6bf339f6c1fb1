//! Core types: NoteComponents and the ordered LinkSet

mod components;
mod link_set;

pub use components::NoteComponents;
pub use link_set::LinkSet;
