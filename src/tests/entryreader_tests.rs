// src/tests/entryreader_tests.rs
//

#![allow(non_snake_case)]

use crate::common::VslError;
use crate::data::entry::Entry;
use crate::readers::entryreader::{parse_header, parse_record, split_key_value, EntryReader};
use crate::tests::common::{expect_done, expect_err, expect_found, tag, ENTRY_EXAMPLE};

use std::io::Cursor;

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// split_key_value
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// white-space is collapsed between key and value, preserved at the
// tail of the value
#[test_case("", "", ""; "empty")]
#[test_case("    foo    ", "foo", ""; "key only padded")]
#[test_case("foo bar", "foo", "bar"; "plain")]
#[test_case("  foo  bar", "foo", "bar"; "leading whitespace")]
#[test_case(" foo    bar   ", "foo", "bar   "; "trailing whitespace preserved")]
#[test_case("\t\t foo\tbar\t ", "foo", "bar\t "; "tabs")]
#[test_case("   ", "", ""; "whitespace only")]
fn test_split_key_value(
    line: &str,
    key: &str,
    value: &str,
) {
    let (got_key, got_value) = split_key_value(line);
    assert_eq!(got_key, key, "key of {:?}", line);
    assert_eq!(got_value, value, "value of {:?}", line);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse_header
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("* << BeReq >> 123", 1, "BeReq", 123; "level 1")]
#[test_case("*   <<  Request >> 40000000", 1, "Request", 40000000; "uneven spacing")]
#[test_case("**  << Request  >> 413073609", 2, "Request", 413073609; "level 2")]
#[test_case("*** << BeReq    >> 7", 3, "BeReq", 7; "level 3")]
#[test_case("*   << Custom   >> 1", 1, "Custom", 1; "unknown kind passes through")]
#[test_case("*   << Session  >> 29236595  ", 1, "Session", 29236595; "trailing whitespace")]
#[test_case("* << Request >> 4294967295", 1, "Request", 4294967295; "vxid u32 max")]
fn test_parse_header_ok(
    line: &str,
    level: usize,
    kind: &str,
    vxid: u32,
) {
    let (got_level, got_kind, got_vxid) = parse_header(line).unwrap();
    assert_eq!(got_level, level);
    assert_eq!(got_kind, kind);
    assert_eq!(got_vxid, vxid);
}

#[test_case(""; "empty")]
#[test_case("- "; "record line")]
#[test_case("* << Request >>"; "four fields")]
#[test_case("* << Request >> 1 extra"; "six fields")]
#[test_case("* << Request >> Foo"; "vxid not numeric")]
#[test_case("* << Request >> -1"; "vxid negative")]
#[test_case("x* << Request >> 1"; "marker run tainted")]
#[test_case("* >> Request << 1"; "brackets swapped")]
#[test_case("* ( Request ) 1"; "brackets wrong")]
fn test_parse_header_err(line: &str) {
    match parse_header(line) {
        Err(VslError::MalformedHeader { .. }) => {}
        other => panic!("parse_header({:?}) should be MalformedHeader, got {:?}", line, other),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse_record
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_parse_record_ok() {
    assert_eq!(parse_record("-   Foo Bar", 1).unwrap(), tag("Foo", "Bar"));
    // no whitespace after the marker prefix is legal
    assert_eq!(parse_record("-Foo Baz", 1).unwrap(), tag("Foo", "Baz"));
    assert_eq!(parse_record("--  ReqURL  /healthz", 2).unwrap(), tag("ReqURL", "/healthz"));
    assert_eq!(parse_record("-   End", 1).unwrap(), tag("End", ""));
    assert_eq!(
        parse_record("- Bar     Foo  Bar    Baz\t", 1).unwrap(),
        tag("Bar", "Foo  Bar    Baz\t"),
    );
}

#[test]
fn test_parse_record_bad_prefix() {
    match parse_record(" - Foo Bar", 1) {
        Err(VslError::MalformedLine { level: 1, .. }) => {}
        other => panic!("expected MalformedLine, got {:?}", other),
    }
    // level demands a longer prefix run than present
    match parse_record("- Foo Bar", 2) {
        Err(VslError::MalformedLine { level: 2, .. }) => {}
        other => panic!("expected MalformedLine, got {:?}", other),
    }
}

#[test]
fn test_parse_record_empty_key() {
    match parse_record("- ", 1) {
        Err(VslError::EmptyKey { .. }) => {}
        other => panic!("expected EmptyKey, got {:?}", other),
    }
    match parse_record("-", 1) {
        Err(VslError::EmptyKey { .. }) => {}
        other => panic!("expected EmptyKey, got {:?}", other),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EntryReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn reader(input: &str) -> EntryReader<Cursor<&str>> {
    EntryReader::new(Cursor::new(input))
}

#[test]
fn test_find_entry_minimal() {
    let mut er = reader("* << BeReq >> 123\n- End");
    let entry: Entry = expect_found(er.find_entry());
    assert_eq!(entry.level, 1);
    assert_eq!(entry.kind, "BeReq");
    assert_eq!(entry.vxid, 123);
    // the sentinel is kept as the last tag
    assert_eq!(entry.tags, vec![tag("End", "")]);
    expect_done(er.find_entry());
}

#[test]
fn test_find_entry_whitespace_quirks() {
    let mut er = reader("*   <<  Request >> 40000000\n- Foo Bar\n-Foo Baz\n- Bar     Foo  Bar    Baz\t\n- End");
    let entry: Entry = expect_found(er.find_entry());
    assert_eq!(entry.level, 1);
    assert_eq!(entry.kind, "Request");
    assert_eq!(entry.vxid, 40000000);
    assert_eq!(
        entry.tags,
        vec![
            tag("Foo", "Bar"),
            tag("Foo", "Baz"),
            tag("Bar", "Foo  Bar    Baz\t"),
            tag("End", ""),
        ],
    );
}

#[test]
fn test_find_entry_sequential() {
    let mut er = reader("* << BeReq >> 123\n- End\n\n* << BeReq >> 124\n- End");
    let first: Entry = expect_found(er.find_entry());
    assert_eq!(first.vxid, 123);
    let second: Entry = expect_found(er.find_entry());
    assert_eq!(second.vxid, 124);
    expect_done(er.find_entry());
    assert_eq!(er.count_entries_processed(), 2);
}

#[test]
fn test_find_entry_skips_leading_blanks() {
    let mut er = reader("\n\n\n* << Session >> 9\n- End");
    let entry: Entry = expect_found(er.find_entry());
    assert_eq!(entry.kind, "Session");
    assert_eq!(entry.vxid, 9);
}

#[test]
fn test_find_entry_level2() {
    let mut er = reader("**  << Request  >> 413073609\n--  Begin  req 413073608 rxreq\n--  End");
    let entry: Entry = expect_found(er.find_entry());
    assert_eq!(entry.level, 2);
    assert_eq!(entry.tags.len(), 2);
}

#[test]
fn test_find_entry_example() {
    let mut er = reader(ENTRY_EXAMPLE);
    let entry: Entry = expect_found(er.find_entry());
    assert_eq!(entry.level, 1);
    assert_eq!(entry.kind, "Request");
    assert_eq!(entry.vxid, 29236596);
    assert_eq!(entry.tags.len(), 39);
    assert_eq!(entry.tags[0], tag("Begin", "req 29236595 rxreq"));
    // every well-formed entry ends with the sentinel
    assert_eq!(entry.tags.last().map(|t| t.key.as_str()), Some("End"));
}

#[test]
fn test_find_entry_empty_input_is_done() {
    expect_done(reader("").find_entry());
    expect_done(reader("\n\n\n").find_entry());
}

#[test]
fn test_find_entry_malformed_header() {
    match expect_err(reader("- ").find_entry()) {
        VslError::MalformedHeader { .. } => {}
        other => panic!("expected MalformedHeader, got {:?}", other),
    }
    match expect_err(reader("* << Request >> Foo").find_entry()) {
        VslError::MalformedHeader { .. } => {}
        other => panic!("expected MalformedHeader, got {:?}", other),
    }
}

#[test]
fn test_find_entry_bad_record_prefix() {
    match expect_err(reader("* << Request >> 1\n - Foo Bar\n- End").find_entry()) {
        VslError::MalformedLine { .. } => {}
        other => panic!("expected MalformedLine, got {:?}", other),
    }
}

#[test]
fn test_find_entry_truncated() {
    // header only
    match expect_err(reader("* << Request >> 1").find_entry()) {
        VslError::TruncatedEntry => {}
        other => panic!("expected TruncatedEntry, got {:?}", other),
    }
    // records but no sentinel
    match expect_err(reader("* << Request >> 1\n- Foo Bar").find_entry()) {
        VslError::TruncatedEntry => {}
        other => panic!("expected TruncatedEntry, got {:?}", other),
    }
}

#[test]
fn test_find_entry_blank_line_inside_block() {
    match expect_err(reader("* << Request >> 1\n\n- End").find_entry()) {
        VslError::UnexpectedBlankLine => {}
        other => panic!("expected UnexpectedBlankLine, got {:?}", other),
    }
}
