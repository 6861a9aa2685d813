//! Shared parsing utilities for Grid Engine command output.
//!
//! Command execution, lenient numeric conversion and timestamp parsing used
//! by gridengine-xml and gridengine-state.

pub mod command;
pub mod numeric;
pub mod time;

pub use command::{run_command, CommandError};
pub use numeric::parse_or_zero;
pub use time::parse_sge_timestamp;

/// Filter helper for optional string fields.
/// Returns None if the string is empty or a placeholder value.
pub fn non_empty_string(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "N/A" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_string() {
        assert_eq!(non_empty_string("1-10:1"), Some("1-10:1".to_string()));
        assert_eq!(non_empty_string("  all.q  "), Some("all.q".to_string()));
        assert_eq!(non_empty_string(""), None);
        assert_eq!(non_empty_string("\n   "), None);
        assert_eq!(non_empty_string("-"), None);
        assert_eq!(non_empty_string("N/A"), None);
    }
}
