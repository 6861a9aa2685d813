//! Host filtering.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Wildcard accepted in place of a hostname.
pub const WILDCARD: &str = "*";

/// Restricts a snapshot to a single host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HostFilter {
    #[default]
    All,
    Host(String),
}

impl HostFilter {
    pub fn matches(&self, hostname: &str) -> bool {
        match self {
            Self::All => true,
            Self::Host(name) => name == hostname,
        }
    }

    /// Keep only the hosts this filter matches. Pending jobs are not affected.
    pub fn apply<V>(&self, hosts: HashMap<String, V>) -> HashMap<String, V> {
        match self {
            Self::All => hosts,
            Self::Host(_) => hosts
                .into_iter()
                .filter(|(name, _)| self.matches(name))
                .collect(),
        }
    }
}

impl FromStr for HostFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == WILDCARD {
            Self::All
        } else {
            Self::Host(s.to_string())
        })
    }
}

impl fmt::Display for HostFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(WILDCARD),
            Self::Host(name) => f.write_str(name),
        }
    }
}
