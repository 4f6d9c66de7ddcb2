// src/data/timestamp.rs

//! Implements the [`Timestamp`] decoded type and the float-seconds
//! micro-grammars shared by the tag-value decoders.
//!
//! [`Timestamp`]: crate::data::timestamp::Timestamp

use crate::data::common::DecodeError;

use std::time::Duration;

use ::chrono::{DateTime, Utc};
use ::more_asserts::debug_assert_lt;

/// Microseconds, the resolution Varnish logs timing data at.
pub type Microseconds = i64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Timestamp
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One decoded `Timestamp` tag value.
///
/// The raw value of a `Timestamp` tag is a named field, e.g.
/// `Start: 1545037998.267746 9.124000 18.152000`: absolute unix time,
/// elapsed seconds since the start of the work unit, elapsed seconds since
/// the previous timestamp of the same work unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timestamp {
    /// Absolute time point, rounded to the nearest microsecond.
    pub abs_time: DateTime<Utc>,
    /// Microseconds elapsed since the start of the owning work unit.
    pub us_since_unit: Microseconds,
    /// Microseconds elapsed since the previous timestamp record of the same
    /// name.
    pub us_since_prev: Microseconds,
}

impl Timestamp {
    /// Decode the three components of a timestamp value (the part after the
    /// event name, e.g. `1545037998.267746 9.124000 18.152000`).
    ///
    /// Exactly three whitespace-separated components are required. The
    /// components are decoded left-to-right; the first invalid one fails
    /// the call.
    pub fn parse(value: &str) -> Result<Timestamp, DecodeError> {
        let fields: Vec<&str> = value.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(DecodeError::MalformedTimestamp { value: value.to_string() });
        }
        Ok(Timestamp {
            abs_time: parse_unix_float(fields[0])?,
            us_since_unit: parse_us_float(fields[1])?,
            us_since_prev: parse_us_float(fields[2])?,
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// float-seconds micro-grammars
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parse unix time in float seconds (e.g. `1545037998.267746`) into an
/// absolute time point.
///
/// The fractional part is rounded to the nearest microsecond. Varnish logs
/// microsecond precision; rounding (instead of truncating) avoids a
/// systematic downward drift on repeated narrow conversions.
pub fn parse_unix_float(s: &str) -> Result<DateTime<Utc>, DecodeError> {
    let seconds: f64 = s.parse::<f64>()?;
    if !seconds.is_finite() {
        return Err(DecodeError::BadAbsTime { seconds });
    }
    let mut sec: i64 = seconds.trunc() as i64;
    // round to microsecond
    let mut micros: i64 = (seconds.fract() * 1e6 + 0.5).floor() as i64;
    if micros >= 1_000_000 {
        sec += 1;
        micros -= 1_000_000;
    } else if micros < 0 {
        sec -= 1;
        micros += 1_000_000;
    }
    debug_assert_lt!(micros, 1_000_000);
    DateTime::<Utc>::from_timestamp(sec, (micros as u32) * 1_000)
        .ok_or(DecodeError::BadAbsTime { seconds })
}

/// Parse elapsed time in float seconds (e.g. `9.124000`) into microseconds.
///
/// The float is converted at nanosecond resolution ([`Duration`] semantics,
/// round-to-nearest) and then truncated to microseconds, matching how
/// relative times behave everywhere else in this crate.
pub fn parse_us_float(s: &str) -> Result<Microseconds, DecodeError> {
    let seconds: f64 = s.parse::<f64>()?;
    let duration: Duration = Duration::try_from_secs_f64(seconds)
        .map_err(|_| DecodeError::BadDuration { seconds })?;
    Ok(duration.as_micros() as Microseconds)
}

/// Parse elapsed time in float seconds into a [`Duration`].
///
/// Negative and non-finite values are `BadDuration`.
pub fn parse_duration(s: &str) -> Result<Duration, DecodeError> {
    let seconds: f64 = s.parse::<f64>()?;
    Duration::try_from_secs_f64(seconds).map_err(|_| DecodeError::BadDuration { seconds })
}
