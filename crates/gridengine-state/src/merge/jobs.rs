//! Raw qstat job records into normalized jobs.

use crate::types::Job;
use gridengine_parsers::{non_empty_string, parse_or_zero, parse_sge_timestamp};
use gridengine_xml::{Qstat, RawJob};
use std::collections::HashMap;

/// Running jobs keyed by full queue instance name (`queue@host`).
pub type JobsByQueue = HashMap<String, Vec<Job>>;

/// Number of tasks an array range accounts for.
///
/// A range like `1-10:1` yields `end - start` (the step is ignored and the
/// count is exclusive of one end). Anything without a dash is a single task.
/// Unparseable bounds count as zero; a reversed range yields zero.
pub fn task_multiplier(tasks: &str) -> u32 {
    if !tasks.contains('-') {
        return 1;
    }

    let range = tasks.split(':').next().unwrap_or_default();
    let mut bounds = range.split('-');
    let start: u32 = parse_or_zero("tasks", bounds.next().unwrap_or_default());
    let end: u32 = parse_or_zero("tasks", bounds.next().unwrap_or_default());

    end.saturating_sub(start)
}

/// Normalize a single raw job record.
pub fn normalize_job(raw: &RawJob) -> Job {
    let slots_per_task: u32 = parse_or_zero("slots", &raw.slots);

    Job {
        number: parse_or_zero("JB_job_number", &raw.number),
        name: raw.name.trim().to_string(),
        owner: raw.owner.trim().to_string(),
        state: raw.state.trim().to_string(),
        slots: slots_per_task.saturating_mul(task_multiplier(&raw.tasks)),
        tasks: non_empty_string(&raw.tasks),
        priority: parse_or_zero("JAT_prio", &raw.priority),
        start_time: parse_sge_timestamp(&raw.start_time),
    }
}

pub fn normalize_jobs(raw: &[RawJob]) -> Vec<Job> {
    raw.iter().map(normalize_job).collect()
}

/// Index running jobs by the queue instance they were listed under.
pub fn jobs_by_queue(qstat: &Qstat) -> JobsByQueue {
    qstat
        .queues()
        .iter()
        .map(|queue| (queue.name.trim().to_string(), normalize_jobs(&queue.jobs)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_job(number: &str, owner: &str, slots: &str, tasks: &str) -> RawJob {
        RawJob {
            list_state: "running".to_string(),
            number: number.to_string(),
            priority: "0.55500".to_string(),
            name: "align".to_string(),
            owner: owner.to_string(),
            state: "r".to_string(),
            start_time: "2024-01-15T10:05:00".to_string(),
            submission_time: String::new(),
            slots: slots.to_string(),
            tasks: tasks.to_string(),
        }
    }

    #[test]
    fn test_task_multiplier_without_range() {
        assert_eq!(task_multiplier(""), 1);
        assert_eq!(task_multiplier("7"), 1);
        assert_eq!(task_multiplier("1,3,5"), 1);
    }

    #[test]
    fn test_task_multiplier_range() {
        assert_eq!(task_multiplier("1-10"), 9);
        assert_eq!(task_multiplier("1-10:1"), 9);
        assert_eq!(task_multiplier("5-25:5"), 20);
        assert_eq!(task_multiplier("3-3"), 0);
    }

    #[test]
    fn test_task_multiplier_malformed() {
        assert_eq!(task_multiplier("a-b"), 0);
        assert_eq!(task_multiplier("-"), 0);
        assert_eq!(task_multiplier("-4"), 4);
        assert_eq!(task_multiplier("1:2-3"), 0);
        assert_eq!(task_multiplier("10-1"), 0);
    }

    #[test]
    fn test_normalize_job() {
        let job = normalize_job(&raw_job("101", "alice", "2", ""));
        assert_eq!(job.number, 101);
        assert_eq!(job.name, "align");
        assert_eq!(job.owner, "alice");
        assert_eq!(job.state, "r");
        assert_eq!(job.slots, 2);
        assert_eq!(job.tasks, None);
        assert_eq!(job.priority, 0.555);
        assert_eq!(
            job.start_time.unwrap().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2024-01-15T10:05:00"
        );
    }

    #[test]
    fn test_normalize_array_job() {
        let job = normalize_job(&raw_job("102", "carol", "2", "1-10:1"));
        assert_eq!(job.slots, 18);
        assert_eq!(job.tasks.as_deref(), Some("1-10:1"));
    }

    #[test]
    fn test_normalize_malformed_fields() {
        let mut raw = raw_job("abc", "dave", "many", "x-y:1");
        raw.priority = "high".to_string();
        raw.start_time = "soon".to_string();

        let job = normalize_job(&raw);
        assert_eq!(job.number, 0);
        assert_eq!(job.slots, 0);
        assert_eq!(job.priority, 0.0);
        assert_eq!(job.start_time, None);
        assert_eq!(job.tasks.as_deref(), Some("x-y:1"));
    }

    #[test]
    fn test_jobs_by_queue() {
        let qstat = gridengine_xml::decode_qstat(
            r#"<job_info>
  <queue_info>
    <Queue-List>
      <name>all.q@node01</name>
      <job_list state="running">
        <JB_job_number>101</JB_job_number>
        <JB_owner>alice</JB_owner>
        <slots>2</slots>
      </job_list>
    </Queue-List>
    <Queue-List>
      <name>all.q@node02</name>
    </Queue-List>
  </queue_info>
  <job_info/>
</job_info>"#,
        )
        .unwrap();

        let jobs = jobs_by_queue(&qstat);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs["all.q@node01"].len(), 1);
        assert_eq!(jobs["all.q@node01"][0].owner, "alice");
        assert!(jobs["all.q@node02"].is_empty());
    }
}
