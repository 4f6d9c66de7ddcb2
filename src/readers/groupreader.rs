// src/readers/groupreader.rs

//! Implements the grouped consumption protocols: a [`GroupReader`] for
//! generic blank-line-delimited groups, a [`RequestReader`] for
//! `varnishlog -g request` output, and a [`SessionReader`] for
//! `varnishlog -g session` output.
//!
//! The three differ only in their blank-line and end-of-stream policies;
//! the distinctions are external contract, not accident, and callers depend
//! on them (see each `find_group`).
//!
//! Example of expected input:
//!
//! ```text
//! *   << Session  >> 413073608
//! -   Begin          sess 0 HTTP/1
//! -   Link           req 413073609 rxreq
//! -   End
//! **  << Request  >> 413073609
//! --  Begin          req 413073608 rxreq
//! --  ReqURL         /healthz
//! --  End
//! ```
//!
//! [`GroupReader`]: crate::readers::groupreader::GroupReader
//! [`RequestReader`]: crate::readers::groupreader::RequestReader
//! [`SessionReader`]: crate::readers::groupreader::SessionReader

use crate::common::{Count, ResultFind, VslError};
use crate::data::entry::Entry;
use crate::readers::entryreader::parse_entry;
use crate::readers::linecursor::LineCursor;

use std::io::BufRead;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// `find_group` result, common to all three group readers.
pub type ResultFindGroup = ResultFind<Vec<Entry>, VslError>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GroupReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Yields blank-line-delimited groups of entries, leniently.
///
/// Leading blank lines are skipped, a trailing blank line is optional: a
/// group that runs into the end of the stream is still returned whole.
/// `Done` only when the remaining stream holds no entries at all.
pub struct GroupReader<R> {
    cursor: LineCursor<R>,
    /// `Count` of groups found.
    count_groups: Count,
}

impl<R: BufRead> GroupReader<R> {
    pub fn new(reader: R) -> GroupReader<R> {
        GroupReader {
            cursor: LineCursor::new(reader),
            count_groups: 0,
        }
    }

    /// Groups found so far.
    pub fn count_groups_found(&self) -> Count {
        self.count_groups
    }

    /// Decode the next group: skip blank lines, then decode entries until a
    /// blank line or the end of the stream.
    ///
    /// The terminating blank line, if present, is not consumed; the next
    /// call skips it. A returned group always holds at least one entry.
    pub fn find_group(&mut self) -> ResultFindGroup {
        defn!();
        match self.cursor.skip_blank_and_peek() {
            Ok(true) => {}
            Ok(false) => {
                defx!("return Done");
                return ResultFind::Done;
            }
            Err(err) => {
                defx!("return Err {:?}", err);
                return ResultFind::Err(VslError::Source(err));
            }
        }
        let mut entries: Vec<Entry> = Vec::new();
        loop {
            match self.cursor.at_blank_or_end() {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(VslError::Source(err));
                }
            }
            match parse_entry(&mut self.cursor) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(err);
                }
            }
        }
        // a non-blank line was peeked above, so at least one entry decoded
        self.count_groups += 1;
        defx!("return Found, {} entries", entries.len());
        ResultFind::Found(entries)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RequestReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Yields request groups (`varnishlog -g request` output), strictly.
///
/// A request group is only complete once its terminating blank line was
/// observed. Entries accumulated when the stream ends without that
/// terminator are almost certainly a truncated capture; they are discarded
/// and the call reports `Done`; callers never receive a partial group as
/// if it were complete.
pub struct RequestReader<R> {
    cursor: LineCursor<R>,
    /// `Count` of groups found.
    count_groups: Count,
}

impl<R: BufRead> RequestReader<R> {
    pub fn new(reader: R) -> RequestReader<R> {
        RequestReader {
            cursor: LineCursor::new(reader),
            count_groups: 0,
        }
    }

    /// Groups found so far.
    pub fn count_groups_found(&self) -> Count {
        self.count_groups
    }

    /// Decode entries until the blank-line group terminator.
    ///
    /// The blank line is consumed. A batch terminated by a blank line is
    /// returned as-is, even when empty (a blank line as the very first
    /// input line terminates an empty batch). End of stream discards any
    /// accumulated batch and reports `Done`.
    pub fn find_group(&mut self) -> ResultFindGroup {
        defn!();
        let mut entries: Vec<Entry> = Vec::new();
        loop {
            let at_blank: bool = match self.cursor.peek_line() {
                Ok(None) => {
                    // EOF without a group terminator; drop any partial batch
                    defx!("return Done, dropping {} entries", entries.len());
                    return ResultFind::Done;
                }
                Ok(Some(line)) => line.is_empty(),
                Err(err) => {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(VslError::Source(err));
                }
            };
            if at_blank {
                if let Err(err) = self.cursor.next_line() {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(VslError::Source(err));
                }
                self.count_groups += 1;
                defx!("return Found, {} entries", entries.len());
                return ResultFind::Found(entries);
            }
            match parse_entry(&mut self.cursor) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(err);
                }
            }
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SessionReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Yields session groups (`varnishlog -g session` output).
///
/// Like [`RequestReader`] a blank line terminates a batch (and is consumed),
/// and a blank batch is a success: a run of `N` leading blank lines yields
/// `N` empty successful batches. Unlike `RequestReader`, a non-empty batch
/// running into the end of the stream is returned whole; only an empty
/// batch at the end of the stream is `Done`.
pub struct SessionReader<R> {
    cursor: LineCursor<R>,
    /// `Count` of groups found.
    count_groups: Count,
}

impl<R: BufRead> SessionReader<R> {
    pub fn new(reader: R) -> SessionReader<R> {
        SessionReader {
            cursor: LineCursor::new(reader),
            count_groups: 0,
        }
    }

    /// Groups found so far.
    pub fn count_groups_found(&self) -> Count {
        self.count_groups
    }

    /// Decode entries until a blank line or the end of the stream.
    pub fn find_group(&mut self) -> ResultFindGroup {
        defn!();
        let mut entries: Vec<Entry> = Vec::new();
        loop {
            let at_blank: bool = match self.cursor.peek_line() {
                Ok(None) => {
                    if entries.is_empty() {
                        defx!("return Done");
                        return ResultFind::Done;
                    }
                    self.count_groups += 1;
                    defx!("return Found at EOF, {} entries", entries.len());
                    return ResultFind::Found(entries);
                }
                Ok(Some(line)) => line.is_empty(),
                Err(err) => {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(VslError::Source(err));
                }
            };
            if at_blank {
                if let Err(err) = self.cursor.next_line() {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(VslError::Source(err));
                }
                self.count_groups += 1;
                defx!("return Found, {} entries", entries.len());
                return ResultFind::Found(entries);
            }
            match parse_entry(&mut self.cursor) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    defx!("return Err {:?}", err);
                    return ResultFind::Err(err);
                }
            }
        }
    }
}
