//! Join the qhost inventory with running jobs from qstat.

use super::jobs::JobsByQueue;
use crate::state_code::translate_state;
use crate::types::{Host, Queue};
use gridengine_parsers::parse_or_zero;
use gridengine_xml::{Qhost, QhostHost, QhostQueue};
use std::collections::HashMap;

/// Full queue instance name as qstat reports it.
pub fn queue_key(queue: &str, host: &str) -> String {
    format!("{}@{}", queue, host)
}

/// Build every host in the inventory, attaching running jobs to their queues.
///
/// A later host with the same name replaces an earlier one.
pub fn build_hosts(qhost: &Qhost, jobs: &JobsByQueue) -> HashMap<String, Host> {
    qhost
        .hosts
        .iter()
        .map(|raw| {
            let host = build_host(raw, jobs);
            (host.hostname.clone(), host)
        })
        .collect()
}

fn build_host(raw: &QhostHost, jobs: &JobsByQueue) -> Host {
    let mut host = Host {
        hostname: raw.name.clone(),
        ..Default::default()
    };

    for property in &raw.properties {
        let value = property.value.as_str();
        match property.name.as_str() {
            "arch_string" => host.architecture = value.trim().to_string(),
            "num_proc" => host.processors = parse_or_zero("num_proc", value),
            "m_socket" => host.sockets = parse_or_zero("m_socket", value),
            "m_core" => host.cores = parse_or_zero("m_core", value),
            "m_thread" => host.threads = parse_or_zero("m_thread", value),
            "load_avg" => host.load_avg = parse_or_zero("load_avg", value),
            _ => {}
        }
    }

    host.queues = build_queues(&raw.queues, &host.hostname, jobs);
    host
}

fn build_queues(
    raw_queues: &[QhostQueue],
    hostname: &str,
    jobs: &JobsByQueue,
) -> HashMap<String, Queue> {
    let mut queues = HashMap::with_capacity(raw_queues.len());

    for raw in raw_queues {
        let mut queue = Queue {
            name: raw.name.clone(),
            jobs: jobs
                .get(&queue_key(&raw.name, hostname))
                .cloned()
                .unwrap_or_default(),
            ..Default::default()
        };

        for property in &raw.properties {
            let value = property.value.as_str();
            match property.name.as_str() {
                "qtype_string" => queue.queue_type = value.trim().to_string(),
                "slots" => queue.slots = parse_or_zero("slots", value),
                "slots_used" => queue.used_slots = parse_or_zero("slots_used", value),
                "slots_resv" => queue.reserved_slots = parse_or_zero("slots_resv", value),
                "state_string" => queue.state = translate_state(value.trim()),
                _ => {}
            }
        }

        queues.insert(queue.name.clone(), queue);
    }

    queues
}
