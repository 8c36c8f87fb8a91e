/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults and thresholds shared by the engine,
 * the configuration layer and the command line shell.
 */

// =============================================================================
// SCHEDULING
// =============================================================================

/// Menu code of the first algorithm (FCFS)
pub const MIN_ALGORITHM_CODE: u8 = 1;

/// Menu code of the last algorithm (LRJF)
pub const MAX_ALGORITHM_CODE: u8 = 8;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Environment variable holding the Round Robin quantum
pub const QUANTUM_ENV: &str = "SCHED_QUANTUM";

/// Environment variable selecting the CPU utilization formula
pub const UTILIZATION_ENV: &str = "SCHED_CPU_UTILIZATION";

/// Environment variable switching tracing output to JSON
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

/// Tracing level used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";
