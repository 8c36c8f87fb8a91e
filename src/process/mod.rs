/*!
 * Process Module
 * Process records, snapshots and snapshot validation
 */

pub mod record;
pub mod snapshot;
pub mod validation;

// Re-export for convenience
pub use record::ProcessRecord;
pub use snapshot::{ProcessSnapshot, ProcessSpec};
pub use validation::validate_snapshot;
