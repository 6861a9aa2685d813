//! Normalized cluster topology types.

use crate::state_code::QueueState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// A running or pending job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Job {
    /// Grid Engine job number
    pub number: u64,

    /// Job name
    pub name: String,

    /// Submitting user
    pub owner: String,

    /// Raw scheduler state code (`r`, `qw`, `Eqw`, ...)
    pub state: String,

    /// Effective slots: slots per task times the task multiplier
    pub slots: u32,

    /// Array task range, e.g. `1-10:1`
    pub tasks: Option<String>,

    /// Normalized priority
    pub priority: f32,

    /// Start time, if the job has started
    pub start_time: Option<DateTime<Utc>>,
}

/// A queue instance on a single host.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Queue {
    pub name: String,

    /// Queue type string, e.g. `BIP`
    pub queue_type: String,

    /// Configured slot capacity
    pub slots: u32,

    pub used_slots: u32,

    pub reserved_slots: u32,

    pub state: QueueState,

    /// Jobs running in this queue instance, in qstat order
    pub jobs: Vec<Job>,
}

/// An execution host and the queue instances it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Host {
    pub hostname: String,
    pub architecture: String,
    pub processors: u32,
    pub sockets: u32,
    pub cores: u32,
    pub threads: u32,
    pub load_avg: f32,

    // Memory and swap are not mapped from qhost properties and stay zero.
    pub total_memory: u64,
    pub used_memory: u64,
    pub total_swap: u64,
    pub used_swap: u64,

    /// Queue instances keyed by queue name
    pub queues: HashMap<String, Queue>,
}

/// One poll of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Hosts keyed by hostname
    pub hosts: HashMap<String, Host>,

    /// Jobs waiting to be scheduled, in qstat order
    pub pending_jobs: Vec<Job>,
}

impl Snapshot {
    pub fn into_parts(self) -> (HashMap<String, Host>, Vec<Job>) {
        (self.hosts, self.pending_jobs)
    }
}
