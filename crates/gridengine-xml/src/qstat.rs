//! Queue and job status as reported by `qstat -u * -xml -f`.
//!
//! Running jobs are nested under the queue instance that hosts them
//! (`queue_info/Queue-List/job_list`); pending jobs are listed separately
//! under `job_info/job_list`.

use crate::error::{DecodeError, Document};
use serde::Deserialize;

/// A raw `job_list` record. All values are text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawJob {
    /// `state` attribute of the list entry (`running`, `pending`, ...).
    #[serde(rename = "@state")]
    pub list_state: String,
    #[serde(rename = "JB_job_number")]
    pub number: String,
    #[serde(rename = "JAT_prio")]
    pub priority: String,
    #[serde(rename = "JB_name")]
    pub name: String,
    #[serde(rename = "JB_owner")]
    pub owner: String,
    /// Scheduler job state code (`r`, `qw`, `Eqw`, ...).
    pub state: String,
    #[serde(rename = "JAT_start_time")]
    pub start_time: String,
    #[serde(rename = "JB_submission_time")]
    pub submission_time: String,
    /// Slots per task.
    pub slots: String,
    /// Array task range, e.g. `1-10:1`.
    pub tasks: String,
}

/// A queue instance (`queue@host`) with the jobs running in it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QstatQueue {
    /// Full queue instance name, `queue@host`.
    pub name: String,
    pub qtype: String,
    pub slots_used: String,
    pub slots_resv: String,
    pub slots_total: String,
    pub load_avg: String,
    pub arch: String,
    pub state: String,
    #[serde(rename = "job_list")]
    pub jobs: Vec<RawJob>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueueInfo {
    #[serde(rename = "Queue-List")]
    pub queues: Vec<QstatQueue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PendingInfo {
    #[serde(rename = "job_list")]
    pub jobs: Vec<RawJob>,
}

/// Root of the qstat document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Qstat {
    pub queue_info: QueueInfo,
    #[serde(rename = "job_info")]
    pub pending: PendingInfo,
}

impl Qstat {
    /// Queue instances in document order.
    pub fn queues(&self) -> &[QstatQueue] {
        &self.queue_info.queues
    }

    /// Jobs not yet scheduled to any queue.
    pub fn pending_jobs(&self) -> &[RawJob] {
        &self.pending.jobs
    }
}

/// Decode qstat XML output.
pub fn decode_qstat(xml: &str) -> Result<Qstat, DecodeError> {
    quick_xml::de::from_str(xml).map_err(|source| DecodeError {
        document: Document::Qstat,
        source,
    })
}
