/*!
 * Process Record
 * Per-process scheduling state threaded through every algorithm
 */

use crate::core::types::{Pid, Priority, Time};
use serde::{Deserialize, Serialize};

/// Mutable scheduling state of one simulated process
///
/// `completion_time` and `response_time` stay `None` until the process
/// finishes or is first dispatched. Invariants held by the engine:
/// - `0 <= remaining_time <= burst_time`
/// - `remaining_time == 0` exactly when `completion_time` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: Priority,
    pub remaining_time: Time,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Time>,
    #[serde(default)]
    pub turnaround_time: Time,
    #[serde(default)]
    pub waiting_time: Time,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<Time>,
}

impl ProcessRecord {
    /// Create a pristine record
    #[must_use]
    pub fn new(pid: Pid, arrival_time: Time, burst_time: Time, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            completion_time: None,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: None,
        }
    }

    /// Wipe everything a previous run left behind
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.response_time = None;
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn has_arrived(&self, clock: Time) -> bool {
        self.arrival_time <= clock
    }

    /// Arrived and still owes CPU time
    #[inline]
    #[must_use]
    pub const fn is_runnable(&self, clock: Time) -> bool {
        !self.is_complete() && self.has_arrived(clock)
    }

    /// Time this process has spent eligible but not running, as of `clock`
    #[inline]
    #[must_use]
    pub const fn waited(&self, clock: Time) -> Time {
        clock.saturating_sub(self.arrival_time)
    }

    /// Run the process for up to `units` starting at `start`.
    ///
    /// Records the response time on first dispatch and the completion time
    /// when the remaining demand reaches zero. Returns the clock value once
    /// the slice ends.
    pub fn execute(&mut self, start: Time, units: Time) -> Time {
        if self.response_time.is_none() {
            self.response_time = Some(self.waited(start));
        }

        let used = units.min(self.remaining_time);
        self.remaining_time -= used;
        let end = start + used;

        if self.remaining_time == 0 {
            self.completion_time = Some(end);
        }
        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_pristine() {
        let record = ProcessRecord::new(1, 3, 5, 2);
        assert_eq!(record.remaining_time, 5);
        assert_eq!(record.completion_time, None);
        assert_eq!(record.response_time, None);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_execute_records_first_response_only() {
        let mut record = ProcessRecord::new(1, 2, 5, 0);

        assert_eq!(record.execute(4, 2), 6);
        assert_eq!(record.response_time, Some(2));
        assert_eq!(record.remaining_time, 3);

        assert_eq!(record.execute(9, 2), 11);
        assert_eq!(record.response_time, Some(2));
        assert!(!record.is_complete());
    }

    #[test]
    fn test_execute_never_overruns_demand() {
        let mut record = ProcessRecord::new(1, 0, 3, 0);

        assert_eq!(record.execute(0, 10), 3);
        assert_eq!(record.remaining_time, 0);
        assert_eq!(record.completion_time, Some(3));
    }

    #[test]
    fn test_reset_wipes_run_state() {
        let mut record = ProcessRecord::new(1, 0, 4, 0);
        record.execute(1, 4);
        record.turnaround_time = 5;
        record.waiting_time = 1;

        record.reset();
        assert_eq!(record, ProcessRecord::new(1, 0, 4, 0));
    }

    #[test]
    fn test_runnable_requires_arrival_and_demand() {
        let mut record = ProcessRecord::new(1, 5, 1, 0);
        assert!(!record.is_runnable(4));
        assert!(record.is_runnable(5));

        record.execute(5, 1);
        assert!(!record.is_runnable(6));
    }
}
