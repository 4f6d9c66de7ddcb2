// src/data/entry.rs

//! Implements the [`Tag`] and [`Entry`] structs and the linear-scan
//! [`Tags`] query view.
//!
//! [`Tag`]: crate::data::entry::Tag
//! [`Entry`]: crate::data::entry::Entry
//! [`Tags`]: crate::data::entry::Tags

use crate::common::{Level, VXID};
use crate::data::common::DecodeError;
use crate::data::keys::TAG_TIMESTAMP;
use crate::data::tagset::TagSet;
use crate::data::tagvalue::named_field;
use crate::data::timestamp::Timestamp;

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tag
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One key/value record line of an entry block.
///
/// The key is a non-empty whitespace-delimited token. The value is the rest
/// of the line after the key, with leading whitespace stripped and trailing
/// whitespace preserved verbatim (the log grammar allows trailing tabs and
/// spaces inside a value). Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new<K, V>(
        key: K,
        value: V,
    ) -> Tag
    where
        K: Into<String>,
        V: Into<String>,
    {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.key, self.value)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Entry
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One decoded transaction block: a header plus its ordered tags.
///
/// A well-formed `Entry` always holds at least one tag; the last tag's key
/// is the literal `End` sentinel that closed the block. Tag order is
/// insertion order and is semantically significant: repeated keys are legal
/// and distinct by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Nesting depth; equals the number of `*` on the header line and the
    /// number of `-` prefix characters on every record line of the block.
    pub level: Level,
    /// Transaction kind, e.g. `"Request"`, `"BeReq"`, `"Session"`. An open
    /// vocabulary; unknown kinds pass through uninterpreted.
    pub kind: String,
    /// Varnish Transaction ID. Zero is not special-cased here.
    pub vxid: VXID,
    /// The ordered tags of the block, the `End` sentinel included as the
    /// last element.
    pub tags: Vec<Tag>,
}

impl Entry {
    /// A cheap linear-scan query view over this entry's tags.
    ///
    /// Construction copies nothing; each query is O(n). Prefer this for
    /// one-shot lookups, and [`tag_set`] for repeated random lookups.
    ///
    /// [`tag_set`]: Entry::tag_set
    pub fn tag_list(&self) -> Tags<'_> {
        Tags::new(&self.tags)
    }

    /// A precomputed multimap query view over this entry's tags.
    ///
    /// Construction groups the tags by key (O(n), allocates); each query is
    /// O(1) on average. The view borrows this entry and must not outlive it.
    pub fn tag_set(&self) -> TagSet<'_> {
        TagSet::new(&self.tags)
    }

    /// All values of tags with key `key`, in log order.
    ///
    /// `TagNotFound` if no tag carries the key.
    pub fn field(
        &self,
        key: &str,
    ) -> Result<Vec<&str>, DecodeError> {
        let values: Vec<&str> = self
            .tags
            .iter()
            .filter(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
            .collect();
        if values.is_empty() {
            return Err(DecodeError::TagNotFound { key: key.to_string() });
        }
        Ok(values)
    }

    /// The value of the single tag with key `key` parsed as an integer.
    ///
    /// Fails if the key is absent, occurs more than once, or does not parse.
    pub fn int_field(
        &self,
        key: &str,
    ) -> Result<i64, DecodeError> {
        let values = self.field(key)?;
        if values.len() != 1 {
            return Err(DecodeError::AmbiguousField {
                key: key.to_string(),
                count: values.len(),
            });
        }
        Ok(values[0].parse::<i64>()?)
    }

    /// The value of the named field `name` among all tags with key `key`.
    ///
    /// Each occurrence of `key` is tried in log order; the first whose value
    /// decodes as a `name: value` pair with a case-insensitive name match
    /// wins. Occurrences without named-field structure are skipped.
    pub fn named_field(
        &self,
        key: &str,
        name: &str,
    ) -> Result<&str, DecodeError> {
        for tag in self.tags.iter().filter(|tag| tag.key == key) {
            if let Ok((field_name, field_value)) = named_field(&tag.value) {
                if field_name.eq_ignore_ascii_case(name) {
                    return Ok(field_value);
                }
            }
        }
        Err(DecodeError::NamedFieldNotFound {
            key: key.to_string(),
            name: name.to_string(),
        })
    }

    /// Every occurrence of `key` decoded as a `name: value` header pair,
    /// in log order.
    ///
    /// `TagNotFound` if the key is absent; `NotNamedField` if any occurrence
    /// lacks header structure.
    pub fn headers(
        &self,
        key: &str,
    ) -> Result<Vec<(&str, &str)>, DecodeError> {
        let mut headers: Vec<(&str, &str)> = Vec::new();
        for tag in self.tags.iter().filter(|tag| tag.key == key) {
            headers.push(named_field(&tag.value)?);
        }
        if headers.is_empty() {
            return Err(DecodeError::TagNotFound { key: key.to_string() });
        }
        Ok(headers)
    }

    /// The `Timestamp` record named `event`, fully decoded.
    ///
    /// Decodes all three timestamp components left-to-right and fails on
    /// the first invalid one.
    pub fn timestamp(
        &self,
        event: &str,
    ) -> Result<Timestamp, DecodeError> {
        let raw = self.named_field(TAG_TIMESTAMP, event)?;
        Timestamp::parse(raw)
    }
}

impl fmt::Display for Entry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "<< {} >> {} ({} tags)", self.kind, self.vxid, self.tags.len())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TagLookup and Tags
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The query contract shared by the tag views [`Tags`] and [`TagSet`].
///
/// Occurrence indexes are 1-based: `nth_with_key(key, 1)` is the first
/// occurrence. Absence is `None`/empty, never an error.
///
/// [`Tags`]: crate::data::entry::Tags
/// [`TagSet`]: crate::data::tagset::TagSet
pub trait TagLookup<'a> {
    /// First tag with key `key`.
    fn first_with_key(
        &self,
        key: &str,
    ) -> Option<&'a Tag>;

    /// `n`th tag with key `key`, `n` counted from 1. `None` when `n` is 0
    /// or exceeds the occurrence count.
    fn nth_with_key(
        &self,
        key: &str,
        n: usize,
    ) -> Option<&'a Tag>;

    /// Last tag with key `key`.
    fn last_with_key(
        &self,
        key: &str,
    ) -> Option<&'a Tag>;

    /// All tags with key `key`, in log order.
    fn all_with_key(
        &self,
        key: &str,
    ) -> Vec<&'a Tag>;

    /// All tags, in log order.
    fn all(&self) -> &'a [Tag];
}

/// Linear-scan view over a slice of tags.
///
/// Contrary to [`TagSet`], `Tags` is free to create: it borrows the slice
/// and performs no allocation. Every query walks the slice, O(n).
///
/// [`TagSet`]: crate::data::tagset::TagSet
#[derive(Clone, Copy, Debug)]
pub struct Tags<'a>(&'a [Tag]);

impl<'a> Tags<'a> {
    pub fn new(tags: &'a [Tag]) -> Tags<'a> {
        Tags(tags)
    }
}

impl<'a> TagLookup<'a> for Tags<'a> {
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
        self.0
            .iter()
            .filter(|tag| tag.key == key)
            .nth(n - 1)
    }

    fn last_with_key(
        &self,
        key: &str,
    ) -> Option<&'a Tag> {
        self.0
            .iter()
            .rev()
            .find(|tag| tag.key == key)
    }

    fn all_with_key(
        &self,
        key: &str,
    ) -> Vec<&'a Tag> {
        self.0
            .iter()
            .filter(|tag| tag.key == key)
            .collect()
    }

    fn all(&self) -> &'a [Tag] {
        self.0
    }
}
