//! Render a snapshot for the terminal or as JSON.

use gridengine_state::{ClusterSummary, Snapshot, UserUsage};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    snapshot: &'a Snapshot,
    summary: &'a ClusterSummary,
}

pub fn render_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    let summary = ClusterSummary::from_snapshot(snapshot);
    serde_json::to_string_pretty(&JsonReport {
        snapshot,
        summary: &summary,
    })
}

fn write_usage(out: &mut String, usage: &BTreeMap<String, UserUsage>) {
    for (owner, u) in usage {
        let _ = writeln!(out, "    {:<16} {:>5} jobs {:>6} slots", owner, u.jobs, u.slots);
    }
}

pub fn render_text(snapshot: &Snapshot) -> String {
    let summary = ClusterSummary::from_snapshot(snapshot);
    let mut out = String::new();

    for queue in &summary.queues {
        let state = if queue.state.flags().is_empty() {
            "-".to_string()
        } else {
            queue.state.to_string()
        };
        let _ = writeln!(
            out,
            "{}@{}  {}  slots {}/{} ({} reserved)",
            queue.queue,
            queue.host,
            state,
            queue.slots_used,
            queue.slots_total,
            queue.slots_reserved
        );
        write_usage(&mut out, &queue.running);
    }

    let _ = writeln!(out, "pending");
    write_usage(&mut out, &summary.pending);
    out
}
