// src/common.rs
//
// common type aliases, the find-result enum, and the grammar error enum
// (avoids circular imports)

use std::io;

use ::thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// type aliases
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Nesting depth of an [`Entry`]; the number of `*` characters on the header
/// line and of `-` prefix characters on every record line of that block.
///
/// [`Entry`]: crate::data::entry::Entry
pub type Level = usize;

/// Varnish Transaction ID. Wraps at `VRT_INTEGER` boundaries in Varnish
/// itself; `u32` holds every value Varnish emits.
///
/// A `VXID` of `0` has contextual meaning only (e.g. "no parent" in a
/// `Begin` tag); the parser passes it through without interpretation.
pub type VXID = u32;

/// A count of anything.
pub type Count = u64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Result enum for the *Reader find functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Result`-like tri-state returned by the `find_*` functions of the
/// reader structs.
///
/// `Done` is the normal "stop iterating" signal: the stream held no further
/// complete unit. It is distinct from `Err`, which carries a grammar
/// violation or an underlying read failure.
#[derive(Debug, PartialEq)]
pub enum ResultFind<T, E> {
    /// Contains the found data.
    Found(T),
    /// Stream is exhausted; nothing to return but no errors happened.
    Done,
    /// Contains the error value, something bad happened.
    Err(E),
}

impl<T, E> ResultFind<T, E> {
    // Querying the contained values

    /// Returns `true` if the result is [`Found`] or [`Done`].
    ///
    /// [`Found`]: ResultFind::Found
    /// [`Done`]: ResultFind::Done
    #[allow(dead_code)]
    #[must_use = "if you intended to assert that this is ok, consider `.unwrap()` instead"]
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        matches!(*self, ResultFind::Found(_) | ResultFind::Done)
    }

    /// Returns `true` if the result is [`Found`].
    ///
    /// [`Found`]: ResultFind::Found
    #[inline(always)]
    pub const fn is_found(&self) -> bool {
        matches!(*self, ResultFind::Found(_))
    }

    /// Returns `true` if the result is [`Done`].
    ///
    /// [`Done`]: ResultFind::Done
    #[inline(always)]
    pub const fn is_done(&self) -> bool {
        matches!(*self, ResultFind::Done)
    }

    /// Returns `true` if the result is [`Err`].
    ///
    /// [`Err`]: ResultFind::Err
    #[allow(dead_code)]
    #[must_use = "if you intended to assert that this is err, consider `.unwrap_err()` instead"]
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        matches!(*self, ResultFind::Err(_))
    }

    // Adapter for each variant

    /// Converts from `ResultFind<T, E>` to [`Option<T>`], consuming `self`,
    /// and discarding the error, if any.
    #[allow(dead_code)]
    #[inline(always)]
    pub fn ok(self) -> Option<T> {
        match self {
            ResultFind::Found(x) => Some(x),
            ResultFind::Done => None,
            ResultFind::Err(_) => None,
        }
    }

    /// Converts from `ResultFind<T, E>` to [`Option<E>`], consuming `self`,
    /// and discarding the found value, if any.
    #[allow(dead_code)]
    #[inline(always)]
    pub fn err(self) -> Option<E> {
        match self {
            ResultFind::Found(_) => None,
            ResultFind::Done => None,
            ResultFind::Err(x) => Some(x),
        }
    }
}

impl<T, E> std::fmt::Display for ResultFind<T, E>
where
    E: std::fmt::Display,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ResultFind::Found(_) => write!(f, "ResultFind::Found"),
            ResultFind::Done => write!(f, "ResultFind::Done"),
            ResultFind::Err(err) => write!(f, "ResultFind::Err({})", err),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// grammar errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Errors raised while decoding [`Entry`] blocks from the line stream.
///
/// All variants except `Source` are structural grammar violations. They are
/// fatal to the in-progress `find_*` call; the stream position is left
/// wherever the scan stopped, no resynchronization is attempted.
///
/// Errors of the on-demand tag-value decoders are a separate enum,
/// [`DecodeError`]; they are never raised from within entry decoding.
///
/// [`Entry`]: crate::data::entry::Entry
/// [`DecodeError`]: crate::data::common::DecodeError
#[derive(Debug, Error)]
pub enum VslError {
    /// The underlying line source failed. Fatal, propagated verbatim,
    /// not retried by this layer.
    #[error("line source failed: {0}")]
    Source(#[from] io::Error),
    /// A header line was expected but the line does not match
    /// `<asterisks> << <kind> >> <vxid>`.
    #[error("malformed header line {line:?}")]
    MalformedHeader { line: String },
    /// A record line does not carry the `-` prefix run required by the
    /// entry's nesting level.
    #[error("parse error on line {line:?}: does not start with {level} '-'")]
    MalformedLine { line: String, level: Level },
    /// A record line carries a prefix but no key.
    #[error("parse error on line {line:?}: empty key")]
    EmptyKey { line: String },
    /// A blank line occurred inside an entry block; blank lines only
    /// separate blocks.
    #[error("parse error: unexpected empty line")]
    UnexpectedBlankLine,
    /// The stream ended before the `End` tag of the current entry was seen.
    #[error("unexpected end of input in the middle of a log entry")]
    TruncatedEntry,
}
