//! Lenient timestamp rendering
//!
//! The backend sends `createdAt`/`sentAt` as ISO strings, sometimes with an
//! offset and sometimes without. Values are kept verbatim and only
//! reformatted for display.

use chrono::{DateTime, Local, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a backend timestamp for display in local time
///
/// Falls back to the raw value when it is not a recognized ISO date-time.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    // Naive values have no zone to convert from
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}
