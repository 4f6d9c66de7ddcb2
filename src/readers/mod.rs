// src/readers/mod.rs

//! "Readers" for _vsllib_.
//!
//! ## Overview of readers
//!
//! * A [`RequestReader`] or [`SessionReader`] drives an entry decode loop to
//!   derive blank-line-delimited groups of [`Entry`]s.
//! * An [`EntryReader`] derives single `Entry`s.
//! * All of them drive a [`LineCursor`] to read text lines with one line of
//!   lookahead.
//!
//! <br/>
//!
//! Processing is single-threaded, synchronous, and pull-based: each
//! `find_*` call consumes exactly as much of the stream as the returned
//! unit occupies, and repeated calls walk the stream. A blocking underlying
//! source (e.g. a live `varnishlog` pipe) simply blocks the call; there is
//! no timeout or cancellation here. The caller owns the source's lifetime.
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`Entry`]: crate::data::entry::Entry
//! [`LineCursor`]: crate::readers::linecursor::LineCursor
//! [`EntryReader`]: crate::readers::entryreader::EntryReader
//! [`RequestReader`]: crate::readers::groupreader::RequestReader
//! [`SessionReader`]: crate::readers::groupreader::SessionReader

pub mod entryreader;
pub mod groupreader;
pub mod linecursor;
