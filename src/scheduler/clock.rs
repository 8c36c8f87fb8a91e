/*!
 * Simulation Clock
 * Shared time keeping and idle-advance rules
 */

use crate::core::types::Time;
use crate::process::ProcessRecord;

/// How the clock skips ahead when nothing is runnable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleRule {
    /// Jump to the arrival of the first incomplete process in index order,
    /// even if a later-indexed process arrives sooner (SJF, Priority, HRRN, LJF)
    FirstPending,
    /// Jump to the earliest arrival among incomplete processes (SRJF, LRJF).
    /// The process found by `earliest_pending` then runs its first unit
    /// without a selection pass.
    EarliestPending,
}

impl IdleRule {
    /// Arrival time the clock should jump to, `None` when every process is done
    pub fn target(&self, records: &[ProcessRecord]) -> Option<Time> {
        let mut pending = records.iter().filter(|r| !r.is_complete());
        match self {
            Self::FirstPending => pending.next().map(|r| r.arrival_time),
            Self::EarliestPending => earliest_pending(records).map(|i| records[i].arrival_time),
        }
    }
}

/// Monotonic simulation clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationClock {
    now: Time,
}

impl SimulationClock {
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    #[inline(always)]
    pub const fn now(&self) -> Time {
        self.now
    }

    /// Move forward to `time`; never moves backwards
    #[inline]
    pub fn advance_to(&mut self, time: Time) {
        self.now = self.now.max(time);
    }

    /// Apply an idle rule. Returns the new time, or `None` if nothing is pending.
    pub fn idle_advance(&mut self, records: &[ProcessRecord], rule: IdleRule) -> Option<Time> {
        let target = rule.target(records)?;
        self.advance_to(target);
        Some(self.now)
    }
}

/// Index of the incomplete process with the earliest arrival.
/// Ties resolve to the lowest index.
pub fn earliest_pending(records: &[ProcessRecord]) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_complete())
        .min_by_key(|(_, r)| r.arrival_time)
        .map(|(index, _)| index)
}

/// Index of the incomplete process arriving soonest strictly after `clock`.
/// Ties resolve to the lowest index.
pub fn next_arrival_after(records: &[ProcessRecord], clock: Time) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_complete() && r.arrival_time > clock)
        .min_by_key(|(_, r)| r.arrival_time)
        .map(|(index, _)| index)
}
