//! Take a snapshot of the cluster by running qhost and qstat.

use crate::filter::HostFilter;
use crate::merge::build_snapshot;
use crate::types::Snapshot;
use gridengine_parsers::{run_command, CommandError};
use gridengine_xml::{decode_qhost, decode_qstat, DecodeError};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Per-queue structured output.
pub const QHOST_ARGS: [&str; 2] = ["-q", "-xml"];

/// All users, all queues, structured full output.
pub const QSTAT_ARGS: [&str; 4] = ["-u", "*", "-xml", "-f"];

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Where to find the Grid Engine commands and how long to wait for them.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Program invoked for the host inventory.
    pub qhost_program: String,
    /// Program invoked for queue and job status.
    pub qstat_program: String,
    /// Upper bound for each command.
    pub command_timeout: Duration,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            qhost_program: "qhost".to_string(),
            qstat_program: "qstat".to_string(),
            command_timeout: Duration::from_secs(30),
        }
    }
}

/// Run qhost then qstat and build a snapshot from their output.
///
/// Any command or decode failure aborts the whole snapshot.
pub async fn take_snapshot(
    config: &SnapshotConfig,
    filter: &HostFilter,
) -> Result<Snapshot, SnapshotError> {
    let mut cmd = Command::new(&config.qhost_program);
    cmd.args(QHOST_ARGS);
    let qhost_xml = run_command(&mut cmd, &config.qhost_program, config.command_timeout).await?;
    let qhost = decode_qhost(&qhost_xml)?;

    let mut cmd = Command::new(&config.qstat_program);
    cmd.args(QSTAT_ARGS);
    let qstat_xml = run_command(&mut cmd, &config.qstat_program, config.command_timeout).await?;
    let qstat = decode_qstat(&qstat_xml)?;

    let snapshot = build_snapshot(&qhost, &qstat, filter);
    tracing::debug!(
        hosts = snapshot.hosts.len(),
        pending_jobs = snapshot.pending_jobs.len(),
        %filter,
        "snapshot complete"
    );
    Ok(snapshot)
}

/// Build a snapshot from already captured qhost and qstat documents.
pub fn snapshot_from_documents(
    qhost_xml: &str,
    qstat_xml: &str,
    filter: &HostFilter,
) -> Result<Snapshot, DecodeError> {
    let qhost = decode_qhost(qhost_xml)?;
    let qstat = decode_qstat(qstat_xml)?;
    Ok(build_snapshot(&qhost, &qstat, filter))
}
