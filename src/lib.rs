// src/lib.rs

//! _vsllib_ parses the textual transaction log emitted by `varnishlog`,
//! the diagnostic logging tool of the Varnish reverse caching proxy.
//!
//! The log is a stream of nested transactions, each printed as a header line
//! followed by an ordered sequence of key/value records ("tags") terminated
//! by the literal `End` tag. Parsing is one-pass, synchronous, and pull-based:
//! a reader struct wraps any [`BufRead`] line source and yields one [`Entry`]
//! or one blank-line-delimited group of entries per call.
//!
//! * An [`EntryReader`] yields single [`Entry`]s.
//! * A [`RequestReader`] and a [`SessionReader`] yield groups of `Entry`s,
//!   with differing end-of-stream policies.
//! * [`Tags`] and [`TagSet`] are read-only query views over one `Entry`'s
//!   tags.
//! * [`data::tagvalue`] and [`data::timestamp`] decode individual tag values
//!   on demand.
//!
//! [`BufRead`]: std::io::BufRead
//! [`Entry`]: crate::data::entry::Entry
//! [`EntryReader`]: crate::readers::entryreader::EntryReader
//! [`RequestReader`]: crate::readers::groupreader::RequestReader
//! [`SessionReader`]: crate::readers::groupreader::SessionReader
//! [`Tags`]: crate::data::entry::Tags
//! [`TagSet`]: crate::data::tagset::TagSet

pub mod common;
pub mod data;
pub mod readers;
#[cfg(test)]
pub mod tests;
