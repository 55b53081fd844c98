//! Containment-aware string set used for amenity tags.

use std::collections::BTreeSet;

/// A string set that keeps only the longest of two containment-related
/// members: inserting `"outdoor pool"` absorbs an existing `"pool"`, and
/// inserting `"pool"` after `"outdoor pool"` is a no-op.
///
/// The final contents are the strings not strictly contained in any other
/// inserted string, so they do not depend on insertion order. Equality and
/// containment are exact; callers normalize (trim, case-fold) beforehand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupSet {
    members: BTreeSet<String>,
}

impl DedupSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` unless it is empty or already covered by a member.
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() || self.members.iter().any(|m| m.contains(value.as_str())) {
            return false;
        }
        self.members.retain(|m| !value.contains(m.as_str()));
        self.members.insert(value)
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consumes the set, returning members in ascending order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.members.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for DedupSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = DedupSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for DedupSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
