// src/data/keys.rs

//! Well-known strings of the VSL vocabulary.
//!
//! Tag keys, entry kinds, timestamp event names, and begin reasons are an
//! open, versioned vocabulary defined by Varnish: new keys appear without
//! notice and must remain representable. They are therefore plain `&str`
//! constants plus [`phf`] lookup sets layered on top, never a closed enum.
//! The parser itself interprets none of them except [`TAG_END`].

use ::phf::{phf_set, Set};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// entry kinds
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Kind string identifying a Varnish client Request transaction.
pub const KIND_REQUEST: &str = "Request";
/// Kind string identifying a Varnish backend request (BeReq) transaction.
pub const KIND_BEREQ: &str = "BeReq";
/// Kind string identifying a Varnish client Session transaction.
pub const KIND_SESSION: &str = "Session";

/// The kinds a stock Varnish emits. Other kinds are legal and pass through
/// the parser uninterpreted.
pub static KINDS_WELL_KNOWN: Set<&'static str> = phf_set! {
    "Request",
    "BeReq",
    "Session",
};

/// Whether `kind` is one of the three kinds a stock Varnish emits.
pub fn is_well_known_kind(kind: &str) -> bool {
    KINDS_WELL_KNOWN.contains(kind)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// tag keys
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Tag key marking the start of a VXID's tag section.
pub const TAG_BEGIN: &str = "Begin";
/// Tag key terminating an entry block. The only key the parser itself
/// interprets.
pub const TAG_END: &str = "End";
/// Tag key identifying a VSL API warning or error.
pub const TAG_VSL: &str = "VSL";
/// Tag key linking an entry to a child VXID it initiated.
pub const TAG_LINK: &str = "Link";

/// Tag key identifying the client request URL.
pub const TAG_REQ_URL: &str = "ReqURL";
/// Tag key identifying the HTTP protocol version of the client request.
pub const TAG_REQ_PROTOCOL: &str = "ReqProtocol";
/// Tag key identifying the HTTP request method verb.
pub const TAG_REQ_METHOD: &str = "ReqMethod";
/// Tag key identifying the HTTP response status code.
pub const TAG_RESP_STATUS: &str = "RespStatus";

/// Tag key informing that a request header was set.
pub const TAG_REQ_HEADER: &str = "ReqHeader";
/// Tag key informing that a request header was unset.
pub const TAG_REQ_UNSET: &str = "ReqUnset";
/// Tag key informing that a response header was set.
pub const TAG_RESP_HEADER: &str = "RespHeader";
/// Tag key informing that a response header was unset.
pub const TAG_RESP_UNSET: &str = "RespUnset";
/// Tag key informing that a backend request header was set.
pub const TAG_BEREQ_HEADER: &str = "BereqHeader";
/// Tag key informing that a backend request header was unset.
pub const TAG_BEREQ_UNSET: &str = "BereqUnset";

/// Tag key informing that a backend connection has been opened.
pub const TAG_BACKEND_OPEN: &str = "BackendOpen";
/// Tag key informing about the reason of a backend fetch failure.
pub const TAG_FETCH_ERROR: &str = "FetchError";
/// Tag key informing about the backend response status code.
pub const TAG_BERESP_STATUS: &str = "BerespStatus";

/// Tag key of the first record of a client connection.
pub const TAG_SESS_OPEN: &str = "SessOpen";
/// Tag key of the last record of a client connection.
pub const TAG_SESS_CLOSE: &str = "SessClose";
/// Tag key identifying a cache hit.
pub const TAG_HIT: &str = "Hit";

/// Tag key carrying timing information for the Varnish worker thread.
pub const TAG_TIMESTAMP: &str = "Timestamp";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// request-level timestamp events
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Request processing start.
pub const TIMESTAMP_EVENT_START: &str = "Start";
/// A complete client request was received.
pub const TIMESTAMP_EVENT_REQ: &str = "Req";
/// The client request body was processed (discarded, cached, or passed on).
pub const TIMESTAMP_EVENT_REQ_BODY: &str = "ReqBody";
/// The request came off the waitinglist.
pub const TIMESTAMP_EVENT_WAITINGLIST: &str = "Waitinglist";
/// Fetch completion.
pub const TIMESTAMP_EVENT_FETCH: &str = "Fetch";
/// Processing finished; the response is ready to be delivered.
pub const TIMESTAMP_EVENT_PROCESS: &str = "Process";
/// Delivery of the response to the client finished.
pub const TIMESTAMP_EVENT_RESP: &str = "Resp";
/// Request processing restart.
pub const TIMESTAMP_EVENT_RESTART: &str = "Restart";

/// The `Timestamp` event names logged at the Request level.
pub static TIMESTAMP_EVENTS_REQUEST: Set<&'static str> = phf_set! {
    "Start",
    "Req",
    "ReqBody",
    "Waitinglist",
    "Fetch",
    "Process",
    "Resp",
    "Restart",
};

/// Whether `event` is a Request-level `Timestamp` event name.
pub fn is_request_timestamp_event(event: &str) -> bool {
    TIMESTAMP_EVENTS_REQUEST.contains(event)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// begin/link reasons and VSL notices
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Transaction begin reason: the transaction evaluates ESI.
pub const REASON_ESI: &str = "esi";
/// Transaction begin reason: backend fetch.
pub const REASON_FETCH: &str = "fetch";
/// Transaction begin reason: request processing restart.
pub const REASON_RESTART: &str = "restart";
/// Transaction begin reason: a new client request.
pub const REASON_RXREQ: &str = "rxreq";

/// `VSL` tag value: varnishlog is not consuming the shared-memory buffer
/// fast enough and unread records are being overwritten.
pub const VSL_STORE_OVERFLOW: &str = "store overflow";
/// `VSL` tag value: varnishlog was forced to terminate log output
/// immediately.
pub const VSL_FLUSH: &str = "flush";

/// `End` tag value logged when the transaction is synthetic/incomplete;
/// a `VCL` tag with details typically accompanies it.
pub const END_NOTE_SYNTH: &str = "synth";
