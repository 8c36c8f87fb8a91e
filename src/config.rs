/*!
 * Simulation Configuration
 * Engine settings from code, serde documents or the environment
 *
 * Environment variables:
 * - SCHED_QUANTUM: Round Robin time quantum (positive integer)
 * - SCHED_CPU_UTILIZATION: `legacy` (default) or `busy_time`
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::{QUANTUM_ENV, UTILIZATION_ENV};
use crate::metrics::UtilizationFormula;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Unvalidated; `SchedulerEngine::from_config` rejects values <= 0
    pub quantum: Option<i64>,
    pub utilization: UtilizationFormula,
}

impl SimulationConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> SchedulerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SchedulerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(QUANTUM_ENV) {
            let quantum = raw.trim().parse::<i64>().map_err(|_| {
                SchedulerError::InvalidConfig(format!("{}='{}' is not an integer", QUANTUM_ENV, raw))
            })?;
            config.quantum = Some(quantum);
        }

        if let Some(raw) = lookup(UTILIZATION_ENV) {
            config.utilization = raw.parse()?;
        }

        Ok(config)
    }

    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    pub fn with_utilization(mut self, utilization: UtilizationFormula) -> Self {
        self.utilization = utilization;
        self
    }
}
