//! Timestamp helpers for the `timestamp` field of stored records.

use chrono::NaiveDateTime;

/// Format used by the storage service, e.g. `2018-06-01 09:30:12.123456`.
/// The fractional part is optional.
const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Parse a storage timestamp. Returns `None` for anything else.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), STORAGE_FORMAT).ok()
}

/// Format as a long date, e.g. "June 01, 2018".
pub fn format_day(ts: &NaiveDateTime) -> String {
    ts.format("%B %d, %Y").to_string()
}
