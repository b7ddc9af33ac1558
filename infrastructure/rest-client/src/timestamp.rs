use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Wire format of date-times sent to the backend.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Reads a backend timestamp. Accepts local date-times with optional
/// fractional seconds, RFC 3339 values (converted to their local wall time)
/// and bare dates (midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(WIRE_FORMAT).to_string()
}
