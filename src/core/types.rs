/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (caller-assigned, 1-based)
pub type Pid = u32;

/// Simulated time in abstract units
pub type Time = u64;

/// Priority level (lower value is more important)
pub type Priority = i32;
