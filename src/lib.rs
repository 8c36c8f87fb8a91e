/*!
 * CPU Scheduling Simulator Library
 * Dispatch order and timing metrics of eight classical scheduling policies
 * over a fixed process snapshot
 */

pub mod config;
pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{SchedulerError, SchedulerResult};
pub use crate::core::types::{Pid, Priority, Time};
pub use config::SimulationConfig;
pub use metrics::{Metrics, UtilizationFormula};
pub use monitoring::init_tracing;
pub use process::{ProcessRecord, ProcessSnapshot, ProcessSpec};
pub use scheduler::{
    Algorithm, SchedulerEngine, Simulation, SimulationReport, Slice, TimeQuantum,
};
