// src/data/mod.rs

//! The `data` module is the passive side of _vsllib_: containers for decoded
//! log data and the on-demand value decoders.
//!
//! ## Definitions of data
//!
//! ### Tag
//!
//! A "tag" is one key/value record line of the log, e.g.
//! `ReqHeader      Host: example.com`. The key is an open vocabulary; the
//! value is a free-form string whose internal structure depends on the key.
//!
//! A tag is represented by a [`Tag`], produced by an [`EntryReader`].
//!
//! ### Entry
//!
//! An "entry" is one complete transaction block: a header line, zero or more
//! ordinary tags, and the terminating `End` tag. An entry is represented by
//! an [`Entry`].
//!
//! ### Tag views
//!
//! [`Tags`] is a borrow of an entry's tag slice with linear-time queries;
//! [`TagSet`] groups the same tags by key up front for constant-time
//! queries. Both are read-only and scoped to the entry they index.
//!
//! ### Decoded values
//!
//! [`timestamp`] and [`tagvalue`] decode a single tag's value into typed
//! data (time points, durations, addresses, named fields). They are invoked
//! by the caller after an entry was decoded; a malformed value never
//! invalidates the entry it came from.
//!
//! [`Tag`]: crate::data::entry::Tag
//! [`Entry`]: crate::data::entry::Entry
//! [`Tags`]: crate::data::entry::Tags
//! [`TagSet`]: crate::data::tagset::TagSet
//! [`EntryReader`]: crate::readers::entryreader::EntryReader
//! [`timestamp`]: crate::data::timestamp
//! [`tagvalue`]: crate::data::tagvalue

pub mod common;
pub mod entry;
pub mod keys;
pub mod tagset;
pub mod tagvalue;
pub mod timestamp;
