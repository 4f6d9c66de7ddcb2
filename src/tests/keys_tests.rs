// src/tests/keys_tests.rs
//

#![allow(non_snake_case)]

use crate::data::keys::{
    is_request_timestamp_event,
    is_well_known_kind,
    KIND_BEREQ,
    KIND_REQUEST,
    KIND_SESSION,
    TIMESTAMP_EVENT_RESP,
    TIMESTAMP_EVENT_START,
};

#[test]
fn test_is_well_known_kind() {
    assert!(is_well_known_kind(KIND_REQUEST));
    assert!(is_well_known_kind(KIND_BEREQ));
    assert!(is_well_known_kind(KIND_SESSION));
    // the vocabulary is open; unknown kinds are legal, just not well-known
    assert!(!is_well_known_kind("Custom"));
    assert!(!is_well_known_kind("request"));
    assert!(!is_well_known_kind(""));
}

#[test]
fn test_is_request_timestamp_event() {
    assert!(is_request_timestamp_event(TIMESTAMP_EVENT_START));
    assert!(is_request_timestamp_event(TIMESTAMP_EVENT_RESP));
    // backend-side events are not request-level
    assert!(!is_request_timestamp_event("Beresp"));
    assert!(!is_request_timestamp_event("start"));
}
