//! Merge qhost and qstat documents into a snapshot.

mod hosts;
mod jobs;

pub use hosts::{build_hosts, queue_key};
pub use jobs::{jobs_by_queue, normalize_job, normalize_jobs, task_multiplier, JobsByQueue};

use crate::filter::HostFilter;
use crate::types::Snapshot;
use gridengine_xml::{Qhost, Qstat};

/// Join both documents into a snapshot and apply the host filter.
pub fn build_snapshot(qhost: &Qhost, qstat: &Qstat, filter: &HostFilter) -> Snapshot {
    let running = jobs_by_queue(qstat);
    let pending_jobs = normalize_jobs(qstat.pending_jobs());
    let hosts = filter.apply(build_hosts(qhost, &running));

    Snapshot {
        hosts,
        pending_jobs,
    }
}
