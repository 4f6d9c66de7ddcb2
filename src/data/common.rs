// src/data/common.rs

//! Error type shared by the on-demand tag-value decoders.

use std::net::AddrParseError;
use std::num::{ParseFloatError, ParseIntError};

use ::thiserror::Error;

/// Errors raised by the structured tag-value decoders and the entry-level
/// field accessors.
///
/// These are local to a single decoder call. They originate only after an
/// [`Entry`] was successfully decoded, so one bad field never invalidates
/// the rest of the entry.
///
/// [`Entry`]: crate::data::entry::Entry
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No tag with the requested key exists in the entry.
    #[error("no tag with key {key:?}")]
    TagNotFound { key: String },
    /// A single-occurrence accessor found more than one tag with the key.
    #[error("tag key {key:?} occurs {count} times, expected exactly one")]
    AmbiguousField { key: String, count: usize },
    /// The value holds no `name: value` structure (no colon).
    #[error("value {value:?} is not a named field")]
    NotNamedField { value: String },
    /// No occurrence of the key carries a named field with the given name.
    #[error("no {key:?} tag with field named {name:?}")]
    NamedFieldNotFound { key: String, name: String },
    /// A timestamp value did not split into exactly three components.
    #[error("malformed timestamp value {value:?}")]
    MalformedTimestamp { value: String },
    /// A positional field is absent from the value.
    #[error("value {value:?} has no field at position {index}")]
    MissingField { index: usize, value: String },
    /// Float seconds that do not form a valid duration (negative, NaN,
    /// or out of range).
    #[error("invalid duration in seconds: {seconds}")]
    BadDuration { seconds: f64 },
    /// Unix float seconds outside the representable datetime range.
    #[error("invalid unix time in seconds: {seconds}")]
    BadAbsTime { seconds: f64 },
    #[error("invalid integer: {0}")]
    BadInt(#[from] ParseIntError),
    #[error("invalid float: {0}")]
    BadFloat(#[from] ParseFloatError),
    #[error("invalid address: {0}")]
    BadAddr(#[from] AddrParseError),
    #[error("invalid URL: {0}")]
    BadUrl(#[from] url::ParseError),
}
