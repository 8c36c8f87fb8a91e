/*!
 * Metrics Module
 * Turnaround, waiting and response aggregates over a finished run
 */

mod calculator;
mod types;

pub use types::{Metrics, UtilizationFormula};
