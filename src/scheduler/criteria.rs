/*!
 * Selection Criteria
 * Pure "who runs next" rules shared by the run-to-completion and unit-step dispatchers
 */

use crate::core::types::Time;
use crate::process::ProcessRecord;
use std::cmp::Ordering;

/// Selection rule for one scheduling policy
///
/// Candidates are scanned in index order and a later candidate only replaces
/// the current best when it is strictly better, so ties go to the lowest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Minimum burst time (SJF)
    ShortestBurst,
    /// Minimum priority value (Priority)
    HighestPriority,
    /// Maximum `(waiting + burst) / burst` (HRRN)
    HighestResponseRatio,
    /// Maximum burst time (LJF)
    LongestBurst,
    /// Minimum remaining time (SRJF)
    ShortestRemaining,
    /// Maximum remaining time (LRJF)
    LongestRemaining,
}

impl Criterion {
    /// Strict better-than between two runnable processes at `clock`
    pub fn prefers(&self, candidate: &ProcessRecord, incumbent: &ProcessRecord, clock: Time) -> bool {
        match self {
            Self::ShortestBurst => candidate.burst_time < incumbent.burst_time,
            Self::HighestPriority => candidate.priority < incumbent.priority,
            Self::HighestResponseRatio => {
                compare_response_ratio(candidate, incumbent, clock) == Ordering::Greater
            }
            Self::LongestBurst => candidate.burst_time > incumbent.burst_time,
            Self::ShortestRemaining => candidate.remaining_time < incumbent.remaining_time,
            Self::LongestRemaining => candidate.remaining_time > incumbent.remaining_time,
        }
    }

    /// Index of the runnable process this rule picks at `clock`
    pub fn select(&self, records: &[ProcessRecord], clock: Time) -> Option<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_runnable(clock))
            .fold(None, |best, (index, record)| match best {
                Some(current) if !self.prefers(record, &records[current], clock) => Some(current),
                _ => Some(index),
            })
    }
}

/// Exact ratio comparison by cross-multiplication
fn compare_response_ratio(a: &ProcessRecord, b: &ProcessRecord, clock: Time) -> Ordering {
    let lhs = u128::from(a.waited(clock) + a.burst_time) * u128::from(b.burst_time);
    let rhs = u128::from(b.waited(clock) + b.burst_time) * u128::from(a.burst_time);
    lhs.cmp(&rhs)
}
