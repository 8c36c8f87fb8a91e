/*!
 * Process Snapshot
 * Caller-supplied process set, loaded from specs or a JSON document
 */

use super::record::ProcessRecord;
use super::validation::validate_snapshot;
use crate::core::errors::SchedulerResult;
use crate::core::types::{Priority, Time};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Process description as entered by the user (pid assigned on load)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub arrival_time: Time,
    pub burst_time: Time,
    #[serde(default)]
    pub priority: Priority,
}

impl ProcessSpec {
    pub const fn new(arrival_time: Time, burst_time: Time, priority: Priority) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority,
        }
    }
}

#[derive(Deserialize)]
struct SnapshotDocument {
    processes: Vec<ProcessSpec>,
}

/// Validated, immutable set of pristine process records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSnapshot {
    records: Vec<ProcessRecord>,
}

impl ProcessSnapshot {
    /// Build a snapshot, numbering processes 1, 2, 3, ... in input order
    pub fn from_specs<I>(specs: I) -> SchedulerResult<Self>
    where
        I: IntoIterator<Item = ProcessSpec>,
    {
        let records = specs
            .into_iter()
            .zip(1..)
            .map(|(spec, pid)| {
                ProcessRecord::new(pid, spec.arrival_time, spec.burst_time, spec.priority)
            })
            .collect();
        Self::from_records(records)
    }

    /// Build a snapshot from records that already carry their pids
    pub fn from_records(mut records: Vec<ProcessRecord>) -> SchedulerResult<Self> {
        validate_snapshot(&records)?;
        records.iter_mut().for_each(ProcessRecord::reset);
        Ok(Self { records })
    }

    /// Parse `{ "processes": [ { "arrival_time", "burst_time", "priority" } ] }`
    pub fn from_json(json: &str) -> SchedulerResult<Self> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        Self::from_specs(document.processes)
    }

    pub fn from_reader<R: Read>(reader: R) -> SchedulerResult<Self> {
        let document: SnapshotDocument = serde_json::from_reader(reader)?;
        Self::from_specs(document.processes)
    }

    #[inline]
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
