//! CLI argument parsing for gridengine.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use gridengine_state::{HostFilter, SnapshotConfig};
use std::time::Duration;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full snapshot as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gridengine")]
#[command(about = "Snapshot Grid Engine hosts, queues and jobs")]
pub struct Args {
    /// Only report this host ("*" for all hosts)
    #[arg(long, default_value = "*")]
    pub host: HostFilter,

    /// Program used for the host inventory
    #[arg(long, default_value = "qhost")]
    pub qhost: String,

    /// Program used for queue and job status
    #[arg(long, default_value = "qstat")]
    pub qstat: String,

    /// Seconds to wait for each command
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Read captured `qhost -q -xml` output instead of running qhost
    #[arg(long, requires = "qstat_xml")]
    pub qhost_xml: Option<Utf8PathBuf>,

    /// Read captured `qstat -u * -xml -f` output instead of running qstat
    #[arg(long, requires = "qhost_xml")]
    pub qstat_xml: Option<Utf8PathBuf>,
}

impl Args {
    pub fn snapshot_config(&self) -> SnapshotConfig {
        SnapshotConfig {
            qhost_program: self.qhost.clone(),
            qstat_program: self.qstat.clone(),
            command_timeout: Duration::from_secs(self.timeout),
        }
    }

    /// Captured documents to replay, when both were given.
    pub fn replay_documents(&self) -> Option<(&Utf8PathBuf, &Utf8PathBuf)> {
        self.qhost_xml.as_ref().zip(self.qstat_xml.as_ref())
    }
}
