// src/readers/entryreader.rs

//! Implements the line grammar of the log and an [`EntryReader`], the
//! driver of deriving [`Entry`]s from a [`LineCursor`].
//!
//! [`EntryReader`]: crate::readers::entryreader::EntryReader
//! [`Entry`]: crate::data::entry::Entry
//! [`LineCursor`]: crate::readers::linecursor::LineCursor

use crate::common::{Count, Level, ResultFind, VslError, VXID};
use crate::data::entry::{Entry, Tag};
use crate::data::keys::TAG_END;
use crate::readers::linecursor::LineCursor;

use std::io::BufRead;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// line grammar
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The nesting marker of header lines; a run of these opens every block.
pub const MARKER_HEADER: u8 = b'*';
/// The nesting marker prefixing every record line of a block.
pub const MARKER_RECORD: u8 = b'-';
/// Opening bracket token of a header line.
const TOKEN_OPEN: &str = "<<";
/// Closing bracket token of a header line.
const TOKEN_CLOSE: &str = ">>";

/// Whether `b` is a whitespace byte for the purpose of log parsing.
#[inline(always)]
const fn white(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n'
}

/// Split a record line remainder (after the marker prefix) into its key and
/// value on whitespace boundaries.
///
/// The key is the first whitespace-delimited token; the value is everything
/// after the whitespace run following the key, trailing whitespace
/// preserved. An empty or whitespace-only remainder gives an empty key.
pub fn split_key_value(s: &str) -> (&str, &str) {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut key_beg: usize = 0;
    while key_beg < len && white(bytes[key_beg]) {
        key_beg += 1;
    }
    let mut key_end: usize = key_beg;
    while key_end < len && !white(bytes[key_end]) {
        key_end += 1;
    }
    let mut val_beg: usize = key_end;
    while val_beg < len && white(bytes[val_beg]) {
        val_beg += 1;
    }

    (&s[key_beg..key_end], &s[val_beg..])
}

/// Classify a header line, e.g.:
///
/// ```text
/// *   << BeReq    >> 32086823
/// *   << Request  >> 32742536
/// *   << Session  >> 29236595
/// ```
///
/// Exactly 5 whitespace-delimited fields are required: a run of one or more
/// `*` (its length is the nesting level), the `<<` token, the kind, the
/// `>>` token, and the VXID as an unsigned integer. Anything else is
/// `MalformedHeader`.
pub fn parse_header(line: &str) -> Result<(Level, String, VXID), VslError> {
    let malformed = || VslError::MalformedHeader { line: line.to_string() };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        defñ!("return MalformedHeader ({} fields)", fields.len());
        return Err(malformed());
    }
    let markers = fields[0].as_bytes();
    if markers.is_empty() || markers.iter().any(|b| *b != MARKER_HEADER) {
        defñ!("return MalformedHeader (marker run)");
        return Err(malformed());
    }
    if fields[1] != TOKEN_OPEN || fields[3] != TOKEN_CLOSE {
        defñ!("return MalformedHeader (bracket tokens)");
        return Err(malformed());
    }
    let level: Level = markers.len();
    let kind: String = fields[2].to_string();
    let vxid: VXID = fields[4]
        .parse::<VXID>()
        .map_err(|_| malformed())?;

    defñ!("return ({}, {:?}, {})", level, kind, vxid);
    Ok((level, kind, vxid))
}

/// Classify a record line of a block at nesting level `level`, e.g.:
///
/// ```text
/// -   ReqStart       136.243.103.218 53602
/// -   ReqURL         /health
/// -   Timestamp      Process: 1545037998.759333 0.000031 0.000031
/// ```
///
/// The line must start with `level` `-` characters; the remainder splits
/// into key and value per [`split_key_value`]. A missing prefix is
/// `MalformedLine`, a missing key is `EmptyKey`.
pub fn parse_record(
    line: &str,
    level: Level,
) -> Result<Tag, VslError> {
    let bytes = line.as_bytes();
    if bytes.len() < level || bytes[..level].iter().any(|b| *b != MARKER_RECORD) {
        return Err(VslError::MalformedLine {
            line: line.to_string(),
            level,
        });
    }
    let (key, value) = split_key_value(&line[level..]);
    if key.is_empty() {
        return Err(VslError::EmptyKey { line: line.to_string() });
    }

    Ok(Tag::new(key, value))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// entry decoding
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decode one entry block from the cursor's current position.
///
/// The cursor must be positioned at the header line (blank lines already
/// skipped). Reads the header, then record lines until the `End` tag, which
/// is kept as the last tag. A blank line before `End` is
/// `UnexpectedBlankLine`; running out of lines is `TruncatedEntry`.
///
/// This is the single algorithmic heart of the crate: a linear scan whose
/// only state is the accumulated tags, with one structural invariant (the
/// record prefix length must equal the header marker run length for the
/// lifetime of the block).
pub(crate) fn parse_entry<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Entry, VslError> {
    defn!();
    let header_line: String = match cursor.next_line()? {
        Some(line) => line,
        None => {
            defx!("return TruncatedEntry (no header)");
            return Err(VslError::TruncatedEntry);
        }
    };
    let (level, kind, vxid) = parse_header(&header_line)?;

    let mut tags: Vec<Tag> = Vec::new();
    loop {
        let line: String = match cursor.next_line()? {
            Some(line) => line,
            None => {
                defx!("return TruncatedEntry");
                return Err(VslError::TruncatedEntry);
            }
        };
        if line.is_empty() {
            defx!("return UnexpectedBlankLine");
            return Err(VslError::UnexpectedBlankLine);
        }
        let tag: Tag = parse_record(&line, level)?;
        let is_end: bool = tag.key == TAG_END;
        tags.push(tag);
        if is_end {
            break;
        }
    }

    defx!("return Entry << {} >> {} with {} tags", kind, vxid, tags.len());
    Ok(Entry {
        level,
        kind,
        vxid,
        tags,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EntryReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`EntryReader::find_entry`] result.
///
/// [`EntryReader::find_entry`]: self::EntryReader#method.find_entry
pub type ResultFindEntry = ResultFind<Entry, VslError>;

/// Yields one [`Entry`] per call from a line source, skipping the blank
/// lines that separate blocks.
///
/// The entry itself is kept mostly in textual form; only the line splitting
/// into keys and values happens here. The `Entry` accessors and the
/// [`tagvalue`] decoders perform any subsequent parsing on demand.
///
/// [`Entry`]: crate::data::entry::Entry
/// [`tagvalue`]: crate::data::tagvalue
pub struct EntryReader<R> {
    cursor: LineCursor<R>,
    /// `Count` of entries decoded successfully.
    count_entries: Count,
}

impl<R: BufRead> EntryReader<R> {
    pub fn new(reader: R) -> EntryReader<R> {
        EntryReader {
            cursor: LineCursor::new(reader),
            count_entries: 0,
        }
    }

    /// Entries decoded successfully so far.
    pub fn count_entries_processed(&self) -> Count {
        self.count_entries
    }

    /// Skip blank lines, then decode exactly one entry.
    ///
    /// `Done` when the stream holds nothing but blank lines (or nothing at
    /// all). Repeated calls walk the stream entry by entry regardless of
    /// group boundaries.
    pub fn find_entry(&mut self) -> ResultFindEntry {
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
        match parse_entry(&mut self.cursor) {
            Ok(entry) => {
                self.count_entries += 1;
                defx!("return Found");
                ResultFind::Found(entry)
            }
            Err(err) => {
                defx!("return Err {:?}", err);
                ResultFind::Err(err)
            }
        }
    }
}
