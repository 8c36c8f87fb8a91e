/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Time};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for every fallible simulator operation
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid scheduling algorithm: {0}")]
    #[diagnostic(
        code(scheduler::invalid_selector),
        help("Use a menu code 1-8 or one of: fcfs, sjf, srjf, rr, priority, hrrn, ljf, lrjf.")
    )]
    InvalidSelector(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round Robin needs a positive integer time quantum.")
    )]
    InvalidQuantum(i64),

    #[error("Round Robin requires a time quantum")]
    #[diagnostic(
        code(scheduler::missing_quantum),
        help("Configure a quantum (SCHED_QUANTUM or --quantum) before selecting Round Robin.")
    )]
    MissingQuantum,

    #[error("Process set is empty")]
    #[diagnostic(
        code(scheduler::empty_process_set),
        help("Supply at least one process; averages over zero processes are undefined.")
    )]
    EmptyProcessSet,

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Every process needs a unique pid and a burst time of at least 1.")
    )]
    InvalidProcess { pid: Pid, reason: String },

    #[error("Process {0} has not completed")]
    #[diagnostic(
        code(scheduler::process_incomplete),
        help("Metrics can only be derived from records produced by a finished simulation.")
    )]
    ProcessIncomplete(Pid),

    #[error("Dispatch stalled at t={clock}: {completed}/{total} processes completed")]
    #[diagnostic(
        code(scheduler::stalled),
        help("No process was runnable and none was pending. The input snapshot is inconsistent.")
    )]
    Stalled {
        clock: Time,
        completed: usize,
        total: usize,
    },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_config),
        help("Check SCHED_QUANTUM and SCHED_CPU_UTILIZATION.")
    )]
    InvalidConfig(String),

    #[error("Malformed process snapshot: {0}")]
    #[diagnostic(
        code(scheduler::snapshot),
        help("Expected a JSON object with a `processes` array of arrival_time/burst_time/priority entries.")
    )]
    Snapshot(String),
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Snapshot(err.to_string())
    }
}
