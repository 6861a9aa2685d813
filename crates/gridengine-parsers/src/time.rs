//! Time parsing utilities for Grid Engine output.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse a Grid Engine XML timestamp (`YYYY-MM-DDTHH:MM:SS`, optionally with
/// fractional seconds).
///
/// Returns None for empty strings, placeholders and anything unparseable.
pub fn parse_sge_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() || s == "-" || s == "N/A" {
        return None;
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|dt| Utc.from_local_datetime(&dt).single())
}
