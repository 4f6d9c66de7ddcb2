// src/tests/common.rs
//
// shared fixtures and helpers for the unit tests

#![allow(non_upper_case_globals)]

use crate::common::{ResultFind, VslError};
use crate::data::entry::{Entry, Tag};
use crate::readers::entryreader::EntryReader;

use std::io::Cursor;

use ::lazy_static::lazy_static;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One realistic client Request entry, leading blank line included (legal).
/// Contains repeated keys, headers with and without a space after the
/// colon, empty values, and deliberately bad `Timestamp` values.
pub const ENTRY_EXAMPLE: &str = r#"
*   << Request  >> 29236596
-   Begin          req 29236595 rxreq
-   Timestamp      Start: 1545037998.267746 9.124000 18.152000
-   Timestamp      Bad1: 1545037998.267746 foo 37.1248520
-   Timestamp      Bad2: 1545037998.267746 22.111
-   ReqStart       127.0.0.1 44876
-   ReqMethod      GET
-   ReqURL         /health
-   ReqProtocol    HTTP/1.0
-   ReqHeader      X-Forwarded-For: 192.168.1.1
-   VCL_call       RECV
-   VCL_return     synth
-   VCL_call       HASH
-   VCL_return     lookup
-   Timestamp      Process: 1545037998.267784 0.000038 0.000038
-   RespHeader     Date: Mon, 17 Dec 2018 09:13:18 GMT
-   RespHeader     Server: Varnish
-   RespHeader     X-Varnish: 29236596
-   RespHeader     GoWithout:Spaces
-   Empty
-   EmptyTwice
-   RespProtocol   HTTP/1.1
-   SomeFloat      0.1
-   RespStatus     200
-   RespReason     OK
-   RespReason     OK
-   VCL_call       SYNTH
-   RespHeader     Access-Control-Allow-Origin: *
-   RespHeader     Content-Type: application/json; charset=utf-8
-   EmptyTwice
-   VCL_return     deliver
-   RespHeader     Content-Length: 2
-   Storage        malloc Transient
-   RespHeader     Accept-Ranges: bytes
-   Debug          "RES_MODE 2"
-   RespHeader     Connection: close
-   Timestamp      Resp: 1545037998.267831 0.000085 0.000047
-   ReqAcct        24 0 24 233 2 235
-   Foo            Bar Not a named field because there's no ':' after 'Key'
-   End"#;

/// One session group of two nested entries, no surrounding blank lines.
pub const GROUP_EXAMPLE: &str = "\
*   << Session  >> 413073608
-   Begin          sess 0 HTTP/1
-   Link           req 413073609 rxreq
-   End
**  << Request  >> 413073609
--  Begin          req 413073608 rxreq
--  ReqURL         /healthz
--  End";

lazy_static! {
    /// `ENTRY_EXAMPLE`, decoded once.
    pub static ref ENTRY: Entry = entry_from_str(ENTRY_EXAMPLE);
    /// The two entries of `GROUP_EXAMPLE`.
    pub static ref GROUP_ENTRIES: Vec<Entry> = vec![
        Entry {
            level: 1,
            kind: String::from("Session"),
            vxid: 413073608,
            tags: vec![
                tag("Begin", "sess 0 HTTP/1"),
                tag("Link", "req 413073609 rxreq"),
                tag("End", ""),
            ],
        },
        Entry {
            level: 2,
            kind: String::from("Request"),
            vxid: 413073609,
            tags: vec![
                tag("Begin", "req 413073608 rxreq"),
                tag("ReqURL", "/healthz"),
                tag("End", ""),
            ],
        },
    ];
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn tag(
    key: &str,
    value: &str,
) -> Tag {
    Tag::new(key, value)
}

/// Decode exactly one entry from `input`, panicking on anything else.
pub fn entry_from_str(input: &str) -> Entry {
    let mut reader = EntryReader::new(Cursor::new(input));
    expect_found(reader.find_entry())
}

/// Unwrap `Found` or panic with the actual variant.
pub fn expect_found<T>(result: ResultFind<T, VslError>) -> T {
    match result {
        ResultFind::Found(value) => value,
        ResultFind::Done => panic!("expected ResultFind::Found, got ResultFind::Done"),
        ResultFind::Err(err) => panic!("expected ResultFind::Found, got ResultFind::Err({})", err),
    }
}

/// Assert `Done` or panic with the actual variant.
pub fn expect_done<T>(result: ResultFind<T, VslError>) {
    match result {
        ResultFind::Found(_) => panic!("expected ResultFind::Done, got ResultFind::Found"),
        ResultFind::Done => {}
        ResultFind::Err(err) => panic!("expected ResultFind::Done, got ResultFind::Err({})", err),
    }
}

/// Unwrap `Err` or panic with the actual variant.
pub fn expect_err<T>(result: ResultFind<T, VslError>) -> VslError {
    match result {
        ResultFind::Found(_) => panic!("expected ResultFind::Err, got ResultFind::Found"),
        ResultFind::Done => panic!("expected ResultFind::Err, got ResultFind::Done"),
        ResultFind::Err(err) => err,
    }
}
