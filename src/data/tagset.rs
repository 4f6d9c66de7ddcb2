// src/data/tagset.rs

//! Implements the [`TagSet`] precomputed query view.
//!
//! [`TagSet`]: crate::data::tagset::TagSet

use crate::data::entry::{Tag, TagLookup};

use std::collections::HashMap;

/// Precomputed multimap view over a slice of tags.
///
/// Construction groups the tags by key while preserving within-key order;
/// queries are O(1) on average. The view is read-only and borrows the tag
/// slice, so it cannot outlive the [`Entry`] it indexes, and it must only be
/// built over a finalized tag sequence (never one still being appended to).
///
/// Prefer [`Tags`] when only a handful of lookups is needed and the
/// construction cost is not worth amortizing.
///
/// [`Entry`]: crate::data::entry::Entry
/// [`Tags`]: crate::data::entry::Tags
#[derive(Debug)]
pub struct TagSet<'a> {
    /// Tags grouped by key, each group in log order.
    lookup: HashMap<&'a str, Vec<&'a Tag>>,
    /// The underlying tags, in log order.
    list: &'a [Tag],
}

impl<'a> TagSet<'a> {
    /// Build the index. O(n), one allocation per distinct key.
    pub fn new(tags: &'a [Tag]) -> TagSet<'a> {
        let mut lookup: HashMap<&'a str, Vec<&'a Tag>> = HashMap::new();
        for tag in tags.iter() {
            lookup
                .entry(tag.key.as_str())
                .or_default()
                .push(tag);
        }

        TagSet { lookup, list: tags }
    }
}

impl<'a> TagLookup<'a> for TagSet<'a> {
    fn first_with_key(
        &self,
        key: &str,
    ) -> Option<&'a Tag> {
        self.nth_with_key(key, 1)
    }

    fn nth_with_key(
        &self,
        key: &str,
        n: usize,
    ) -> Option<&'a Tag> {
        if n == 0 {
            return None;
        }
        self.lookup
            .get(key)
            .and_then(|tags| tags.get(n - 1))
            .copied()
    }

    fn last_with_key(
        &self,
        key: &str,
    ) -> Option<&'a Tag> {
        self.lookup
            .get(key)
            .and_then(|tags| tags.last())
            .copied()
    }

    fn all_with_key(
        &self,
        key: &str,
    ) -> Vec<&'a Tag> {
        match self.lookup.get(key) {
            Some(tags) => tags.clone(),
            None => Vec::new(),
        }
    }

    fn all(&self) -> &'a [Tag] {
        self.list
    }
}
