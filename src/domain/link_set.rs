//! Insertion-ordered, duplicate-free set of related item identifiers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An ordered set of link identifiers.
///
/// Iteration order is the order in which each identifier was first
/// inserted. Inserting an identifier that is already present leaves both
/// the membership and the order unchanged.
///
/// # Examples
///
/// ```
/// use noteblob::domain::LinkSet;
///
/// let mut links: LinkSet = ["B", "A"].into_iter().collect();
/// assert!(!links.insert("B"));
/// assert!(links.insert("C"));
/// assert_eq!(links.to_string(), "B, A, C");
/// ```
#[derive(Clone, Default)]
pub struct LinkSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl LinkSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier, returning `true` if it was not already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.members.contains(&id) {
            return false;
        }
        self.members.insert(id.clone());
        self.order.push(id);
        true
    }

    /// Removes an identifier, returning `true` if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }

    /// Returns `true` if the identifier is in the set.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates identifiers in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.order.iter()
    }

    /// Returns the identifiers as a slice, in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Returns a new set holding `self` followed by the entries of `other`
    /// not already present.
    pub fn union(&self, other: &LinkSet) -> LinkSet {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged
    }
}

impl PartialEq for LinkSet {
    fn eq(&self, other: &Self) -> bool {
        // Order is observable in the encoded text, so it takes part in equality
        self.order == other.order
    }
}

impl Eq for LinkSet {}

impl fmt::Debug for LinkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.order.iter()).finish()
    }
}

impl fmt::Display for LinkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.order.join(", "))
    }
}

impl<S: Into<String>> Extend<S> for LinkSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for LinkSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = LinkSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for LinkSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl Serialize for LinkSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.order.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LinkSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ids = Vec::<String>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}
