/*!
 * Metrics Types
 */

use crate::core::errors::SchedulerError;
use crate::core::types::Time;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Aggregate timing metrics of one simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Percentage
    pub cpu_utilization: f64,
}

/// How `cpu_utilization` is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationFormula {
    /// `total_time / total_time * 100`: always 100%, idle gaps ignored.
    /// Kept as the default for report compatibility.
    #[default]
    Legacy,
    /// `sum(burst_time) / total_time * 100`: idle gaps lower utilization
    BusyTime,
}

impl UtilizationFormula {
    pub fn apply(&self, busy_time: u128, total_time: Time) -> f64 {
        if total_time == 0 {
            return 0.0;
        }

        let numerator = match self {
            Self::Legacy => u128::from(total_time),
            Self::BusyTime => busy_time,
        };
        numerator as f64 / total_time as f64 * 100.0
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::BusyTime => "busy_time",
        }
    }
}

impl FromStr for UtilizationFormula {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "busy_time" | "busytime" | "busy" => Ok(Self::BusyTime),
            _ => Err(SchedulerError::InvalidConfig(format!(
                "unknown utilization formula '{}'. Valid: legacy, busy_time",
                s
            ))),
        }
    }
}
