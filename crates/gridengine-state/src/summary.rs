//! Per-queue and per-user aggregates of a snapshot.

use crate::state_code::QueueState;
use crate::types::{Job, Snapshot};
use serde::Serialize;
use std::collections::BTreeMap;

/// Job and slot totals for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserUsage {
    pub jobs: u32,
    pub slots: u32,
}

/// Totals for a single queue instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueSummary {
    pub queue: String,
    pub host: String,
    pub state: QueueState,
    pub slots_total: u32,
    pub slots_used: u32,
    pub slots_reserved: u32,
    /// Running jobs and slots per owner
    pub running: BTreeMap<String, UserUsage>,
}

/// Aggregates over a whole snapshot, in a stable (host, queue) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub queues: Vec<QueueSummary>,
    /// Pending jobs and requested slots per owner
    pub pending: BTreeMap<String, UserUsage>,
}

fn usage_by_owner<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> BTreeMap<String, UserUsage> {
    let mut usage: BTreeMap<String, UserUsage> = BTreeMap::new();
    for job in jobs {
        let entry = usage.entry(job.owner.clone()).or_default();
        entry.jobs += 1;
        entry.slots = entry.slots.saturating_add(job.slots);
    }
    usage
}

impl ClusterSummary {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut queues: Vec<QueueSummary> = snapshot
            .hosts
            .iter()
            .flat_map(|(host_name, host)| {
                host.queues.iter().map(move |(queue_name, queue)| QueueSummary {
                    queue: queue_name.clone(),
                    host: host_name.clone(),
                    state: queue.state.clone(),
                    slots_total: queue.slots,
                    slots_used: queue.used_slots,
                    slots_reserved: queue.reserved_slots,
                    running: usage_by_owner(&queue.jobs),
                })
            })
            .collect();
        queues.sort_by(|a, b| (&a.host, &a.queue).cmp(&(&b.host, &b.queue)));

        Self {
            queues,
            pending: usage_by_owner(&snapshot.pending_jobs),
        }
    }

    /// Running jobs and slots per owner across every queue.
    pub fn running_totals(&self) -> BTreeMap<String, UserUsage> {
        let mut totals: BTreeMap<String, UserUsage> = BTreeMap::new();
        for (owner, usage) in self.queues.iter().flat_map(|q| q.running.iter()) {
            let entry = totals.entry(owner.clone()).or_default();
            entry.jobs += usage.jobs;
            entry.slots = entry.slots.saturating_add(usage.slots);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_code::translate_state;
    use crate::types::{Host, Queue};
    use std::collections::HashMap;

    fn job(owner: &str, slots: u32) -> Job {
        Job {
            owner: owner.to_string(),
            slots,
            ..Default::default()
        }
    }

    fn queue(name: &str, slots: u32, state: &str, jobs: Vec<Job>) -> (String, Queue) {
        (
            name.to_string(),
            Queue {
                name: name.to_string(),
                slots,
                state: translate_state(state),
                jobs,
                ..Default::default()
            },
        )
    }

    fn snapshot() -> Snapshot {
        let node01 = Host {
            hostname: "node01".to_string(),
            queues: HashMap::from([
                queue(
                    "all.q",
                    32,
                    "",
                    vec![job("alice", 2), job("bob", 4), job("alice", 1)],
                ),
                queue("gpu.q", 4, "d", vec![]),
            ]),
            ..Default::default()
        };
        let node02 = Host {
            hostname: "node02".to_string(),
            queues: HashMap::from([queue("all.q", 16, "", vec![job("alice", 8)])]),
            ..Default::default()
        };

        Snapshot {
            hosts: HashMap::from([
                ("node02".to_string(), node02),
                ("node01".to_string(), node01),
            ]),
            pending_jobs: vec![job("bob", 1), job("carol", 16), job("bob", 2)],
        }
    }

    #[test]
    fn test_queue_order() {
        let summary = ClusterSummary::from_snapshot(&snapshot());
        let order: Vec<_> = summary
            .queues
            .iter()
            .map(|q| format!("{}@{}", q.queue, q.host))
            .collect();
        assert_eq!(order, ["all.q@node01", "gpu.q@node01", "all.q@node02"]);
    }

    #[test]
    fn test_running_per_user() {
        let summary = ClusterSummary::from_snapshot(&snapshot());
        let all_q = &summary.queues[0];
        assert_eq!(all_q.slots_total, 32);
        assert!(all_q.state.is_running());
        assert_eq!(all_q.running["alice"], UserUsage { jobs: 2, slots: 3 });
        assert_eq!(all_q.running["bob"], UserUsage { jobs: 1, slots: 4 });

        let gpu_q = &summary.queues[1];
        assert_eq!(gpu_q.state.to_string(), "Disabled");
        assert!(gpu_q.running.is_empty());
    }

    #[test]
    fn test_pending_per_user() {
        let summary = ClusterSummary::from_snapshot(&snapshot());
        assert_eq!(summary.pending["bob"], UserUsage { jobs: 2, slots: 3 });
        assert_eq!(summary.pending["carol"], UserUsage { jobs: 1, slots: 16 });
    }

    #[test]
    fn test_running_totals() {
        let totals = ClusterSummary::from_snapshot(&snapshot()).running_totals();
        assert_eq!(totals["alice"], UserUsage { jobs: 3, slots: 11 });
        assert_eq!(totals["bob"], UserUsage { jobs: 1, slots: 4 });
    }

    #[test]
    fn test_empty_snapshot() {
        let summary = ClusterSummary::from_snapshot(&Snapshot::default());
        assert!(summary.queues.is_empty());
        assert!(summary.pending.is_empty());
    }
}
