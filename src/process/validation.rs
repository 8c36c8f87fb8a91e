/*!
 * Snapshot Validation
 * Reject process sets the engine cannot simulate
 */

use super::record::ProcessRecord;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Time;
use std::collections::HashSet;

/// Validate a process snapshot before simulation
///
/// Every completion time is bounded by the latest arrival plus the total
/// burst demand, so a set whose bound fits in `Time` cannot overflow the
/// clock during any run.
pub fn validate_snapshot(records: &[ProcessRecord]) -> SchedulerResult<()> {
    if records.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    let mut seen = HashSet::with_capacity(records.len());
    let mut latest_arrival: Time = 0;
    let mut demand: Time = 0;
    for record in records {
        if record.burst_time == 0 {
            return Err(SchedulerError::InvalidProcess {
                pid: record.pid,
                reason: "burst time must be at least 1".to_string(),
            });
        }

        if !seen.insert(record.pid) {
            return Err(SchedulerError::InvalidProcess {
                pid: record.pid,
                reason: "duplicate pid".to_string(),
            });
        }

        latest_arrival = latest_arrival.max(record.arrival_time);
        demand = demand
            .checked_add(record.burst_time)
            .filter(|total| latest_arrival.checked_add(*total).is_some())
            .ok_or_else(|| SchedulerError::InvalidProcess {
                pid: record.pid,
                reason: "arrival plus total burst time overflows the clock".to_string(),
            })?;
    }

    Ok(())
}
