//! Lenient numeric conversion for property values.
//!
//! Grid Engine reports every value as text. A value that does not convert is
//! replaced by zero; the snapshot is never aborted because of a single field.

use std::fmt::Display;
use std::str::FromStr;

/// Parse `value` as `T`, falling back to `T::default()` on failure.
///
/// `field` only names the value in the debug log emitted on fallback.
pub fn parse_or_zero<T>(field: &str, value: &str) -> T
where
    T: FromStr + Default,
    T::Err: Display,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return T::default();
    }
    match trimmed.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(field, value = trimmed, error = %e, "unconvertible value, using zero");
            T::default()
        }
    }
}
