//! Grid Engine cluster state.
//!
//! Joins the qhost inventory with qstat job listings into a host, queue and
//! job topology plus a flat list of pending jobs.

pub mod filter;
pub mod merge;
pub mod snapshot;
pub mod state_code;
pub mod summary;
pub mod types;

pub use filter::{HostFilter, WILDCARD};
pub use merge::{
    build_hosts, build_snapshot, jobs_by_queue, normalize_job, normalize_jobs, queue_key,
    task_multiplier, JobsByQueue,
};
pub use snapshot::{snapshot_from_documents, take_snapshot, SnapshotConfig, SnapshotError};
pub use state_code::{translate_state, QueueState, StateFlag};
pub use summary::{ClusterSummary, QueueSummary, UserUsage};
pub use types::{Host, Job, Queue, Snapshot};
