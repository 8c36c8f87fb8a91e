/*!
 * Scheduler Module
 * Scheduling algorithms, selection rules and the simulation engine
 */

pub mod clock;
pub mod criteria;
pub mod engine;
pub mod timeline;
pub mod types;

// Re-export public API
pub use clock::{earliest_pending, next_arrival_after, IdleRule, SimulationClock};
pub use criteria::Criterion;
pub use engine::{Dispatch, SchedulerEngine, Simulation, SimulationReport};
pub use timeline::{Slice, Timeline};
pub use types::{Algorithm, TimeQuantum};
