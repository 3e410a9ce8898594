//! Timestamp layout shared by the text sinks
//!
//! Every stream sink writes the same fixed-width timestamp: local wall-clock
//! time with a numeric UTC offset, e.g. `2024-01-02T15:04:05-07:00`. The layout
//! conforms to both ISO 8601 and RFC 3339, so the output can be parsed back
//! with any RFC 3339 parser.

use chrono::{DateTime, FixedOffset, Local, ParseResult};
use std::io::Write;

/// strftime layout of the rendered timestamp
pub const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Width in bytes of a rendered timestamp
pub const TIME_WIDTH: usize = 25;

/// Append `timestamp` to `buf` using [`TIME_LAYOUT`].
pub fn append_timestamp(buf: &mut Vec<u8>, timestamp: &DateTime<Local>) {
    // Writing into a Vec cannot fail.
    let _ = write!(buf, "{}", timestamp.format(TIME_LAYOUT));
}

/// Parse a timestamp previously rendered with [`TIME_LAYOUT`].
pub fn parse_timestamp(s: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
}
