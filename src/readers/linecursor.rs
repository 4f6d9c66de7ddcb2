// src/readers/linecursor.rs

//! Implements a [`LineCursor`], the line source wrapper with one-line
//! lookahead that underlies all the readers.
//!
//! [`LineCursor`]: crate::readers::linecursor::LineCursor

use crate::common::Count;

use std::io::{BufRead, Result};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Wraps a fallible line source with one line of lookahead.
///
/// Lines are `'\n'`-delimited; the delimiter and a trailing `'\r'` are
/// stripped. A zero-length line is a "blank line", the group/entry separator
/// of the log grammar. The lookahead is what lets the grouping protocols
/// decide whether a blank line terminates the current batch without
/// consuming past it.
///
/// Any underlying read failure is propagated verbatim as [`std::io::Error`]
/// and is terminal for the current call.
pub struct LineCursor<R> {
    reader: R,
    /// One line of pushback. `None` means nothing peeked; `Some(None)`
    /// means end of stream was observed.
    peeked: Option<Option<String>>,
    /// `Count` of lines read from the underlying source.
    count_lines: Count,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> LineCursor<R> {
        LineCursor {
            reader,
            peeked: None,
            count_lines: 0,
        }
    }

    /// Lines read from the underlying source so far (peeked lines included).
    pub fn count_lines_read(&self) -> Count {
        self.count_lines
    }

    /// Read one line from the underlying source, delimiters stripped.
    /// `None` at end of stream.
    fn read_line_raw(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let size = self.reader.read_line(&mut buf)?;
        if size == 0 {
            defñ!("EOF");
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        self.count_lines += 1;
        defñ!("line {} {:?}", self.count_lines, buf);
        Ok(Some(buf))
    }

    /// Advance to the next line and return it. `None` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self.peeked.take() {
            Some(line) => Ok(line),
            None => self.read_line_raw(),
        }
    }

    /// The next line without consuming it. `None` at end of stream.
    pub fn peek_line(&mut self) -> Result<Option<&str>> {
        if self.peeked.is_none() {
            let line = self.read_line_raw()?;
            self.peeked = Some(line);
        }
        match &self.peeked {
            Some(line) => Ok(line.as_deref()),
            None => Ok(None),
        }
    }

    /// Advance past zero or more consecutive blank lines. Returns whether a
    /// non-blank line is now available (peeked, not consumed).
    pub fn skip_blank_and_peek(&mut self) -> Result<bool> {
        defn!();
        loop {
            let is_blank: bool = match self.peek_line()? {
                None => {
                    defx!("return false (EOF)");
                    return Ok(false);
                }
                Some(line) => line.is_empty(),
            };
            if !is_blank {
                defx!("return true");
                return Ok(true);
            }
            self.next_line()?;
        }
    }

    /// Non-advancing check: is the cursor at a blank line or at the end of
    /// the stream? Used by the grouping protocols to decide whether to stop
    /// a batch.
    pub fn at_blank_or_end(&mut self) -> Result<bool> {
        let at: bool = match self.peek_line()? {
            None => true,
            Some(line) => line.is_empty(),
        };
        defñ!("return {}", at);
        Ok(at)
    }
}
