// src/data/tagvalue.rs

//! Typed decoders for the values of well-known tags.
//!
//! Each decoder is a thin borrow of one [`Tag`] whose methods parse the
//! positional fields of that tag kind's value, per the [Varnish VSL
//! reference]. Decoding is pure, best-effort, and positional: a malformed or
//! missing field is a [`DecodeError`], never a panic, and decoding one field
//! does not touch the others.
//!
//! [`Tag`]: crate::data::entry::Tag
//! [`DecodeError`]: crate::data::common::DecodeError
//! [Varnish VSL reference]: https://varnish-cache.org/docs/trunk/reference/vsl.html

use crate::common::VXID;
use crate::data::common::DecodeError;
use crate::data::entry::Tag;
use crate::data::timestamp::{parse_duration, parse_unix_float, Microseconds, parse_us_float};

use std::net::IpAddr;
use std::time::Duration;

use ::chrono::{DateTime, Utc};
use ::memchr::memchr;
use ::url::Url;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// field helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Split a `name: value` record value on the first colon.
///
/// The name is trimmed of surrounding horizontal whitespace; so is the
/// value, which may directly follow the colon (`GoWithout:Spaces` is the
/// header `GoWithout` → `Spaces`). A value with no colon is `NotNamedField`.
pub fn named_field(value: &str) -> Result<(&str, &str), DecodeError> {
    let colon: usize = match memchr(b':', value.as_bytes()) {
        Some(index) => index,
        None => {
            return Err(DecodeError::NotNamedField { value: value.to_string() });
        }
    };
    let horizontal_white = |c: char| c == ' ' || c == '\t';
    let name = value[..colon].trim_matches(horizontal_white);
    let field_value = value[colon + 1..].trim_matches(horizontal_white);
    Ok((name, field_value))
}

/// `n`th (0-based) whitespace-delimited field of `value`.
fn nth_field(
    value: &str,
    n: usize,
) -> Result<&str, DecodeError> {
    value
        .split_whitespace()
        .nth(n)
        .ok_or_else(|| DecodeError::MissingField {
            index: n,
            value: value.to_string(),
        })
}

/// Last whitespace-delimited field of `value`.
fn last_field(value: &str) -> Result<&str, DecodeError> {
    value
        .split_whitespace()
        .last()
        .ok_or_else(|| DecodeError::MissingField {
            index: 0,
            value: value.to_string(),
        })
}

fn addr_at(
    value: &str,
    index: usize,
) -> Result<(IpAddr, u16), DecodeError> {
    let ip: IpAddr = nth_field(value, index)?.parse::<IpAddr>()?;
    let port: u16 = nth_field(value, index + 1)?.parse::<u16>()?;
    Ok((ip, port))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// per-tag decoders
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Begin` marks the start of a VXID, the first record of a transaction.
///
/// Value layout: `<kind> <parent-vxid> <reason>`.
pub struct Begin<'a>(pub &'a Tag);

impl<'a> Begin<'a> {
    /// The transaction kind this VXID begins as: `req`, `bereq`, or `sess`.
    pub fn kind(&self) -> Result<&'a str, DecodeError> {
        nth_field(&self.0.value, 0)
    }

    /// The VXID of the parent transaction; `0` when there is none to name.
    pub fn parent_vxid(&self) -> Result<VXID, DecodeError> {
        Ok(nth_field(&self.0.value, 1)?.parse::<VXID>()?)
    }

    /// Why the transaction started, e.g. `rxreq`, `fetch`, `restart`, `esi`.
    pub fn reason(&self) -> Result<&'a str, DecodeError> {
        last_field(&self.0.value)
    }
}

/// `Link` links this VXID to a child VXID it initiated.
///
/// Value layout: `<child-kind> <child-vxid> <reason>`.
pub struct Link<'a>(pub &'a Tag);

impl<'a> Link<'a> {
    /// The child transaction kind: `req` or `bereq`.
    pub fn child_kind(&self) -> Result<&'a str, DecodeError> {
        nth_field(&self.0.value, 0)
    }

    /// The VXID of the child transaction.
    pub fn child_vxid(&self) -> Result<VXID, DecodeError> {
        Ok(nth_field(&self.0.value, 1)?.parse::<VXID>()?)
    }

    /// Why the child transaction was created.
    pub fn reason(&self) -> Result<&'a str, DecodeError> {
        last_field(&self.0.value)
    }
}

/// `BackendOpen` is logged when a new backend connection is opened.
///
/// Value layout:
/// `<fd> <backend-name> <remote-ip> <remote-port> <local-ip> <local-port>`.
pub struct BackendOpen<'a>(pub &'a Tag);

impl<'a> BackendOpen<'a> {
    /// File descriptor of the backend connection.
    pub fn file_descriptor(&self) -> Result<i32, DecodeError> {
        Ok(nth_field(&self.0.value, 0)?.parse::<i32>()?)
    }

    /// VCL name of the backend.
    pub fn name(&self) -> Result<&'a str, DecodeError> {
        nth_field(&self.0.value, 1)
    }

    /// Remote (backend) address and port.
    pub fn remote_addr(&self) -> Result<(IpAddr, u16), DecodeError> {
        addr_at(&self.0.value, 2)
    }

    /// Local address and port.
    pub fn local_addr(&self) -> Result<(IpAddr, u16), DecodeError> {
        addr_at(&self.0.value, 4)
    }
}

/// `SessOpen` is the first record of a client connection, with the
/// socket-endpoints of the connection.
///
/// Value layout: `<remote-ip> <remote-port> <socket-name> <local-ip>
/// <local-port> <start-unix-float> <fd>`.
pub struct SessOpen<'a>(pub &'a Tag);

impl<'a> SessOpen<'a> {
    /// Remote (client) address and port.
    pub fn remote_addr(&self) -> Result<(IpAddr, u16), DecodeError> {
        addr_at(&self.0.value, 0)
    }

    /// Name of the listen socket the connection arrived on, e.g. `a0`.
    pub fn socket_name(&self) -> Result<&'a str, DecodeError> {
        nth_field(&self.0.value, 2)
    }

    /// Local address and port.
    pub fn local_addr(&self) -> Result<(IpAddr, u16), DecodeError> {
        addr_at(&self.0.value, 3)
    }

    /// Time the session was started, microsecond precision.
    pub fn session_start(&self) -> Result<DateTime<Utc>, DecodeError> {
        parse_unix_float(nth_field(&self.0.value, 5)?)
    }

    /// File descriptor of the client connection.
    pub fn file_descriptor(&self) -> Result<i32, DecodeError> {
        Ok(nth_field(&self.0.value, 6)?.parse::<i32>()?)
    }
}

/// `SessClose` is the last record of a client connection.
///
/// Value layout: `<reason> <duration-seconds>`.
pub struct SessClose<'a>(pub &'a Tag);

impl<'a> SessClose<'a> {
    /// Why the connection closed, e.g. `REM_CLOSE`, `TX_EOF`.
    pub fn reason(&self) -> Result<&'a str, DecodeError> {
        nth_field(&self.0.value, 0)
    }

    /// How long the session lasted.
    pub fn duration(&self) -> Result<Duration, DecodeError> {
        parse_duration(last_field(&self.0.value)?)
    }
}

/// `Timestamp` carries timing information for the Varnish worker thread.
///
/// Value layout: `<event>: <abs-unix-float> <since-unit-float>
/// <since-last-float>`. For the all-at-once decode of the three numeric
/// components see [`Entry::timestamp`] and [`Timestamp::parse`].
///
/// [`Entry::timestamp`]: crate::data::entry::Entry#method.timestamp
/// [`Timestamp::parse`]: crate::data::timestamp::Timestamp#method.parse
pub struct TimestampTag<'a>(pub &'a Tag);

impl<'a> TimestampTag<'a> {
    /// The event name, e.g. `Start`, `Process`, `Resp`.
    pub fn event(&self) -> Result<&'a str, DecodeError> {
        let (name, _value) = named_field(&self.0.value)?;
        Ok(name)
    }

    /// Absolute time of the event, microsecond-rounded.
    pub fn time(&self) -> Result<DateTime<Utc>, DecodeError> {
        parse_unix_float(nth_field(&self.0.value, 1)?)
    }

    /// Microseconds since the start of the owning work unit.
    pub fn since_start(&self) -> Result<Microseconds, DecodeError> {
        parse_us_float(nth_field(&self.0.value, 2)?)
    }

    /// Microseconds since the previous timestamp of the work unit.
    pub fn since_last(&self) -> Result<Microseconds, DecodeError> {
        parse_us_float(nth_field(&self.0.value, 3)?)
    }
}

/// `Hit` is logged when an object is looked up in cache.
///
/// Value layout: `<object-vxid> <ttl> <grace> <keep>`.
pub struct Hit<'a>(pub &'a Tag);

impl<'a> Hit<'a> {
    /// VXID of the transaction that inserted the object.
    pub fn vxid(&self) -> Result<VXID, DecodeError> {
        Ok(nth_field(&self.0.value, 0)?.parse::<VXID>()?)
    }

    /// Remaining time to live, in seconds.
    pub fn ttl(&self) -> Result<f64, DecodeError> {
        Ok(nth_field(&self.0.value, 1)?.parse::<f64>()?)
    }

    /// Grace period, in seconds.
    pub fn grace(&self) -> Result<f64, DecodeError> {
        Ok(nth_field(&self.0.value, 2)?.parse::<f64>()?)
    }

    /// Keep period, in seconds.
    pub fn keep(&self) -> Result<f64, DecodeError> {
        Ok(nth_field(&self.0.value, 3)?.parse::<f64>()?)
    }
}

/// `ReqURL` holds the client request URL.
///
/// Varnish logs the request-target, which is usually an origin-form path
/// like `/health?probe=1`; [`path`] and [`query`] split that form without
/// allocation. [`url`] parses the value as a full [`Url`] for the rarer
/// absolute-form targets.
///
/// [`path`]: ReqUrl#method.path
/// [`query`]: ReqUrl#method.query
/// [`url`]: ReqUrl#method.url
pub struct ReqUrl<'a>(pub &'a Tag);

impl<'a> ReqUrl<'a> {
    /// The path component: the value up to the first `?`.
    pub fn path(&self) -> &'a str {
        match memchr(b'?', self.0.value.as_bytes()) {
            Some(index) => &self.0.value[..index],
            None => &self.0.value,
        }
    }

    /// The query component: the value after the first `?`, if any.
    pub fn query(&self) -> Option<&'a str> {
        memchr(b'?', self.0.value.as_bytes()).map(|index| &self.0.value[index + 1..])
    }

    /// The value parsed as an absolute [`Url`].
    pub fn url(&self) -> Result<Url, DecodeError> {
        Ok(Url::parse(&self.0.value)?)
    }
}

/// `BerespStatus` holds the backend response status code.
pub struct BerespStatus<'a>(pub &'a Tag);

impl<'a> BerespStatus<'a> {
    pub fn status(&self) -> Result<u16, DecodeError> {
        Ok(self.0.value.trim().parse::<u16>()?)
    }
}
