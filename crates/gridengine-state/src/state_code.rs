//! Queue state codes.
//!
//! qhost reports a queue's state as a string of single-letter flags, e.g.
//! `dE` for a queue that is both disabled and in error. An empty string means
//! the queue is running normally.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A single queue state flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StateFlag {
    Running,
    Error,
    Disabled,
    Suspended,
    Orphaned,
    ConfigAmbiguous,
    LoadThresholdAlarm,
    SuspendThresholdAlarm,
    CalendarDisabled,
    CalendarSuspend,
    Unknown,
}

impl StateFlag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Error => "Error",
            Self::Disabled => "Disabled",
            Self::Suspended => "Suspended",
            Self::Orphaned => "Orphaned",
            Self::ConfigAmbiguous => "ConfigAmbiguous",
            Self::LoadThresholdAlarm => "LoadThresholdAlarm",
            Self::SuspendThresholdAlarm => "SuspendThresholdAlarm",
            Self::CalendarDisabled => "CalendarDisabled",
            Self::CalendarSuspend => "CalendarSuspend",
            Self::Unknown => "Unknown",
        }
    }

    /// Lowercase human-readable description, suitable for metric labels.
    pub fn description(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Error => "error",
            Self::Disabled => "disabled",
            Self::Suspended => "suspended",
            Self::Orphaned => "orphaned",
            Self::ConfigAmbiguous => "configuration ambiguous",
            Self::LoadThresholdAlarm => "load threshold alarm",
            Self::SuspendThresholdAlarm => "suspend threshold alarm",
            Self::CalendarDisabled => "disabled by calendar",
            Self::CalendarSuspend => "suspended by calendar",
            Self::Unknown => "unknown",
        }
    }
}

/// Single-letter codes as documented for `qstat -f` / `qhost -q`.
const STATE_CODES: [(char, StateFlag); 10] = [
    ('E', StateFlag::Error),
    ('d', StateFlag::Disabled),
    ('s', StateFlag::Suspended),
    ('o', StateFlag::Orphaned),
    ('c', StateFlag::ConfigAmbiguous),
    ('a', StateFlag::LoadThresholdAlarm),
    ('A', StateFlag::SuspendThresholdAlarm),
    ('D', StateFlag::CalendarDisabled),
    ('C', StateFlag::CalendarSuspend),
    ('u', StateFlag::Unknown),
];

static CODE_TABLE: Lazy<HashMap<char, StateFlag>> =
    Lazy::new(|| STATE_CODES.iter().copied().collect());

/// Composite queue state: the flags in the order they appeared in the code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueState(Vec<StateFlag>);

impl QueueState {
    pub fn running() -> Self {
        Self(vec![StateFlag::Running])
    }

    pub fn flags(&self) -> &[StateFlag] {
        &self.0
    }

    pub fn is_running(&self) -> bool {
        self.0 == [StateFlag::Running]
    }

    /// Lowercase descriptions joined with ", ".
    pub fn description(&self) -> String {
        self.0
            .iter()
            .map(|flag| flag.description())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for QueueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}

impl Serialize for QueueState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Translate a state code string into a composite state.
///
/// Characters are scanned left to right; unrecognized codes are skipped and
/// repeated codes are kept.
pub fn translate_state(code: &str) -> QueueState {
    if code.is_empty() {
        return QueueState::running();
    }

    QueueState(
        code.chars()
            .filter_map(|c| CODE_TABLE.get(&c).copied())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_is_running() {
        let state = translate_state("");
        assert!(state.is_running());
        assert_eq!(state.to_string(), "Running");
    }

    #[test]
    fn test_single_codes() {
        for (code, flag) in STATE_CODES {
            let state = translate_state(&code.to_string());
            assert_eq!(state.flags(), [flag]);
        }
    }

    #[test]
    fn test_input_order_preserved() {
        assert_eq!(translate_state("dE").to_string(), "Disabled, Error");
        assert_eq!(translate_state("Ed").to_string(), "Error, Disabled");
        assert_eq!(
            translate_state("DA").to_string(),
            "CalendarDisabled, SuspendThresholdAlarm"
        );
    }

    #[test]
    fn test_unrecognized_codes_dropped() {
        let state = translate_state("xyz");
        assert!(state.flags().is_empty());
        assert_eq!(state.to_string(), "");
        assert!(!state.is_running());

        assert_eq!(translate_state("d?E").to_string(), "Disabled, Error");
        assert_eq!(translate_state(" ").to_string(), "");
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(translate_state("aa").to_string(), "LoadThresholdAlarm, LoadThresholdAlarm");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(translate_state("c").flags(), [StateFlag::ConfigAmbiguous]);
        assert_eq!(translate_state("C").flags(), [StateFlag::CalendarSuspend]);
    }

    #[test]
    fn test_description() {
        assert_eq!(translate_state("").description(), "running");
        assert_eq!(translate_state("dD").description(), "disabled, disabled by calendar");
    }
}
