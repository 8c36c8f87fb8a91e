/*!
 * Scheduler Engine
 * Drives every algorithm's dispatch loop over a private working copy
 */

use super::clock::{IdleRule, SimulationClock};
use super::criteria::Criterion;
use super::timeline::{Slice, Timeline};
use super::types::{Algorithm, TimeQuantum};
use crate::config::SimulationConfig;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Time;
use crate::metrics::{Metrics, UtilizationFormula};
use crate::process::{validate_snapshot, ProcessRecord};
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

mod non_preemptive;
mod preemptive;
mod round_robin;

/// Dispatch strategy behind an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Arrival order, each process to completion (FCFS)
    Sequential,
    /// Pick by criterion, run the pick to completion
    RunToCompletion(Criterion),
    /// Pick by criterion again after every time unit
    UnitStep(Criterion),
    /// FIFO ready queue, at most one quantum per turn (Round Robin)
    Quantum(TimeQuantum),
}

impl Dispatch {
    /// Resolve the strategy for `algorithm`; Round Robin needs a quantum
    pub fn for_algorithm(
        algorithm: Algorithm,
        quantum: Option<TimeQuantum>,
    ) -> SchedulerResult<Self> {
        Ok(match algorithm {
            Algorithm::Fcfs => Self::Sequential,
            Algorithm::Sjf => Self::RunToCompletion(Criterion::ShortestBurst),
            Algorithm::Priority => Self::RunToCompletion(Criterion::HighestPriority),
            Algorithm::Hrrn => Self::RunToCompletion(Criterion::HighestResponseRatio),
            Algorithm::Ljf => Self::RunToCompletion(Criterion::LongestBurst),
            Algorithm::Srjf => Self::UnitStep(Criterion::ShortestRemaining),
            Algorithm::Lrjf => Self::UnitStep(Criterion::LongestRemaining),
            Algorithm::RoundRobin => {
                Self::Quantum(quantum.ok_or(SchedulerError::MissingQuantum)?)
            }
        })
    }

    pub const fn quantum(&self) -> Option<TimeQuantum> {
        match self {
            Self::Quantum(quantum) => Some(*quantum),
            _ => None,
        }
    }
}

/// Finished run: records in caller order with timing fields populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    pub algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    pub processes: Vec<ProcessRecord>,
    /// Latest completion time
    pub total_time: Time,
    pub timeline: Vec<Slice>,
}

impl Simulation {
    /// Derive turnaround/waiting times and the aggregate metrics
    pub fn into_report(mut self, formula: UtilizationFormula) -> SchedulerResult<SimulationReport> {
        let metrics = Metrics::compute(&mut self.processes, self.total_time, formula)?;
        Ok(SimulationReport {
            simulation: self,
            metrics,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    #[serde(flatten)]
    pub simulation: Simulation,
    pub metrics: Metrics,
}

/// Mutable state of one run. Owned exclusively by `SchedulerEngine::simulate`.
struct WorkingSet {
    records: Vec<ProcessRecord>,
    clock: SimulationClock,
    completed: usize,
    timeline: Timeline,
}

impl WorkingSet {
    fn new(processes: &[ProcessRecord]) -> Self {
        let mut records = processes.to_vec();
        records.iter_mut().for_each(ProcessRecord::reset);

        Self {
            records,
            clock: SimulationClock::new(),
            completed: 0,
            timeline: Timeline::new(),
        }
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.completed == self.records.len()
    }

    /// Give the CPU to `records[index]` for up to `units`
    fn dispatch(&mut self, index: usize, units: Time) {
        let start = self.clock.now();
        let record = &mut self.records[index];
        let end = record.execute(start, units);
        self.timeline.record(record.pid, start, end);

        trace!(
            pid = record.pid,
            start,
            end,
            remaining = record.remaining_time,
            "dispatched"
        );

        if record.is_complete() {
            self.completed += 1;
            debug!(pid = record.pid, completion_time = end, "process completed");
        }
        self.clock.advance_to(end);
    }

    /// Nothing runnable: skip the clock ahead per `rule`
    fn idle(&mut self, rule: IdleRule) -> SchedulerResult<Time> {
        let from = self.clock.now();
        let to = self
            .clock
            .idle_advance(&self.records, rule)
            .ok_or_else(|| self.stalled())?;
        debug!(from, to, ?rule, "cpu idle");
        Ok(to)
    }

    fn stalled(&self) -> SchedulerError {
        SchedulerError::Stalled {
            clock: self.clock.now(),
            completed: self.completed,
            total: self.records.len(),
        }
    }

    fn total_time(&self) -> Time {
        self.records
            .iter()
            .filter_map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }
}

/// Scheduling simulation engine
///
/// `simulate` never touches the caller's records: each call clones them,
/// resets the clone and returns it, so repeated runs are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerEngine {
    quantum: Option<TimeQuantum>,
    utilization: UtilizationFormula,
}

impl SchedulerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configuration, validating the quantum eagerly
    pub fn from_config(config: &SimulationConfig) -> SchedulerResult<Self> {
        Ok(Self {
            quantum: config.quantum.map(TimeQuantum::new).transpose()?,
            utilization: config.utilization,
        })
    }

    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.quantum = Some(quantum);
        self
    }

    pub fn with_utilization(mut self, utilization: UtilizationFormula) -> Self {
        self.utilization = utilization;
        self
    }

    pub fn quantum(&self) -> Option<TimeQuantum> {
        self.quantum
    }

    pub fn utilization(&self) -> UtilizationFormula {
        self.utilization
    }

    /// Run `algorithm` over a working copy of `processes`
    #[instrument(skip(self, processes), fields(processes = processes.len()))]
    pub fn simulate(
        &self,
        processes: &[ProcessRecord],
        algorithm: Algorithm,
    ) -> SchedulerResult<Simulation> {
        validate_snapshot(processes)?;
        let dispatch = Dispatch::for_algorithm(algorithm, self.quantum)?;

        let mut work = WorkingSet::new(processes);
        match dispatch {
            Dispatch::Sequential => work.run_sequential(),
            Dispatch::RunToCompletion(criterion) => work.run_to_completion(criterion)?,
            Dispatch::UnitStep(criterion) => work.run_unit_step(criterion)?,
            Dispatch::Quantum(quantum) => work.run_round_robin(quantum)?,
        }

        let total_time = work.total_time();
        info!(
            algorithm = algorithm.as_str(),
            total_time,
            busy_time = work.timeline.busy_time(),
            "simulation complete"
        );

        Ok(Simulation {
            algorithm,
            quantum: dispatch.quantum(),
            processes: work.records,
            total_time,
            timeline: work.timeline.into_slices(),
        })
    }

    /// Simulate and compute metrics in one step
    pub fn run(
        &self,
        processes: &[ProcessRecord],
        algorithm: Algorithm,
    ) -> SchedulerResult<SimulationReport> {
        self.simulate(processes, algorithm)?
            .into_report(self.utilization)
    }

    /// Run every algorithm over the same snapshot, in menu order.
    /// Round Robin is skipped when no quantum is configured.
    pub fn compare(&self, processes: &[ProcessRecord]) -> SchedulerResult<Vec<SimulationReport>> {
        Algorithm::ALL
            .into_iter()
            .filter(|algorithm| {
                let runnable = !algorithm.requires_quantum() || self.quantum.is_some();
                if !runnable {
                    debug!(algorithm = algorithm.as_str(), "skipped: no time quantum");
                }
                runnable
            })
            .map(|algorithm| self.run(processes, algorithm))
            .collect()
    }
}
