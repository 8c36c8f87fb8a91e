/*!
 * Metrics Calculator
 * Derives per-process turnaround/waiting times and run-wide averages
 */

use super::types::{Metrics, UtilizationFormula};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Time;
use crate::process::ProcessRecord;

impl Metrics {
    /// Fill in `turnaround_time` and `waiting_time` for every record and
    /// average them over the whole set.
    ///
    /// `total_time` is the latest completion time of the run. A record that
    /// was never dispatched adds nothing to the response sum but still
    /// counts towards the divisor. Sums are kept in `u128` so large
    /// per-process times cannot overflow the totals.
    pub fn compute(
        records: &mut [ProcessRecord],
        total_time: Time,
        formula: UtilizationFormula,
    ) -> SchedulerResult<Self> {
        if records.is_empty() {
            return Err(SchedulerError::EmptyProcessSet);
        }

        let mut total_waiting: u128 = 0;
        let mut total_turnaround: u128 = 0;
        let mut total_response: u128 = 0;
        let mut busy_time: u128 = 0;

        for record in records.iter_mut() {
            let completion = record
                .completion_time
                .ok_or(SchedulerError::ProcessIncomplete(record.pid))?;

            let turnaround = completion.checked_sub(record.arrival_time);
            let waiting = turnaround.and_then(|t| t.checked_sub(record.burst_time));
            let (Some(turnaround), Some(waiting)) = (turnaround, waiting) else {
                return Err(SchedulerError::InvalidProcess {
                    pid: record.pid,
                    reason: format!(
                        "completion time {} precedes arrival {} plus burst {}",
                        completion, record.arrival_time, record.burst_time
                    ),
                });
            };

            record.turnaround_time = turnaround;
            record.waiting_time = waiting;

            total_turnaround += u128::from(turnaround);
            total_waiting += u128::from(waiting);
            if let Some(response) = record.response_time {
                total_response += u128::from(response);
            }
            busy_time += u128::from(record.burst_time);
        }

        let n = records.len() as f64;
        Ok(Self {
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_response_time: total_response as f64 / n,
            cpu_utilization: formula.apply(busy_time, total_time),
        })
    }
}
