//! The structured view of a reminder's notes field.

use crate::domain::LinkSet;
use serde::{Deserialize, Deserializer, Serialize};

/// The three logical fields packed into a reminder's single notes field.
///
/// Every field is optional, and absence is distinct from an empty value:
/// an absent field is omitted from the encoded text entirely. The link set,
/// when present, is never empty; [`NoteComponents::set_links`] and
/// deserialization both collapse an empty set to `None`.
///
/// # Examples
///
/// ```
/// use noteblob::domain::NoteComponents;
///
/// let note = NoteComponents::new()
///     .with_content("Check security issues")
///     .with_critical("Blocking release")
///     .with_link("ABC123");
/// assert_eq!(note.critical(), Some("Blocking release"));
/// assert_eq!(note.links().map(|l| l.len()), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    critical: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_links"
    )]
    links: Option<LinkSet>,
}

fn deserialize_links<'de, D>(deserializer: D) -> Result<Option<LinkSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let links = Option::<LinkSet>::deserialize(deserializer)?;
    Ok(links.filter(|set| !set.is_empty()))
}

impl NoteComponents {
    /// Creates a record with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the critical annotation.
    pub fn with_critical(mut self, critical: impl Into<String>) -> Self {
        self.critical = Some(critical.into());
        self
    }

    /// Adds one link, creating the link set if needed.
    pub fn with_link(mut self, id: impl Into<String>) -> Self {
        self.links.get_or_insert_with(LinkSet::new).insert(id);
        self
    }

    /// Adds several links in order.
    pub fn with_links<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut links = self.links.take().unwrap_or_default();
        links.extend(ids);
        self.set_links(Some(links));
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn critical(&self) -> Option<&str> {
        self.critical.as_deref()
    }

    pub fn links(&self) -> Option<&LinkSet> {
        self.links.as_ref()
    }

    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    pub fn set_critical(&mut self, critical: Option<String>) {
        self.critical = critical;
    }

    /// Replaces the link set. An empty set is stored as `None`.
    pub fn set_links(&mut self, links: Option<LinkSet>) {
        self.links = links.filter(|set| !set.is_empty());
    }

    /// Mutable access to the link set, creating it if absent.
    ///
    /// Callers that may leave the set empty must go through
    /// [`NoteComponents::set_links`] afterwards to restore the invariant.
    pub(crate) fn links_mut(&mut self) -> &mut LinkSet {
        self.links.get_or_insert_with(LinkSet::new)
    }

    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.critical.is_none() && self.links.is_none()
    }
}
