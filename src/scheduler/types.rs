/*!
 * Scheduler Types
 * Algorithm selector and time quantum
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::{MAX_ALGORITHM_CODE, MIN_ALGORITHM_CODE};
use crate::core::types::Time;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The eight simulated scheduling algorithms, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First Come First Serve (non-preemptive)
    Fcfs,
    /// Shortest Job First (non-preemptive)
    Sjf,
    /// Shortest Remaining Job First (preemptive)
    Srjf,
    /// Round Robin with a fixed time quantum
    RoundRobin,
    /// Priority scheduling, lower value wins (non-preemptive)
    Priority,
    /// Highest Response Ratio Next (non-preemptive)
    Hrrn,
    /// Longest Job First (non-preemptive)
    Ljf,
    /// Longest Remaining Job First (preemptive)
    Lrjf,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srjf,
        Self::RoundRobin,
        Self::Priority,
        Self::Hrrn,
        Self::Ljf,
        Self::Lrjf,
    ];

    /// Resolve a menu code (1-8)
    pub fn from_code(code: u8) -> SchedulerResult<Self> {
        if !(MIN_ALGORITHM_CODE..=MAX_ALGORITHM_CODE).contains(&code) {
            return Err(SchedulerError::InvalidSelector(code.to_string()));
        }
        Ok(Self::ALL[usize::from(code - MIN_ALGORITHM_CODE)])
    }

    #[inline]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Fcfs => 1,
            Self::Sjf => 2,
            Self::Srjf => 3,
            Self::RoundRobin => 4,
            Self::Priority => 5,
            Self::Hrrn => 6,
            Self::Ljf => 7,
            Self::Lrjf => 8,
        }
    }

    /// Short name, used for parsing, logging and serialization
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srjf => "srjf",
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
            Self::Hrrn => "hrrn",
            Self::Ljf => "ljf",
            Self::Lrjf => "lrjf",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve (FCFS)",
            Self::Sjf => "Shortest Job First (SJF)",
            Self::Srjf => "Shortest Remaining Job First (SRJF)",
            Self::RoundRobin => "Round Robin (RR)",
            Self::Priority => "Priority Scheduling",
            Self::Hrrn => "Highest Response Ratio Next (HRRN)",
            Self::Ljf => "Longest Job First (LJF)",
            Self::Lrjf => "Longest Remaining Job First (LRJF)",
        }
    }

    /// Whether a running process can lose the CPU before it finishes
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srjf | Self::RoundRobin | Self::Lrjf)
    }

    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(code) = normalized.parse::<u8>() {
            return Self::from_code(code);
        }

        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srjf" | "srtf" => Ok(Self::Srjf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            "hrrn" => Ok(Self::Hrrn),
            "ljf" => Ok(Self::Ljf),
            "lrjf" | "lrtf" => Ok(Self::Lrjf),
            _ => Err(SchedulerError::InvalidSelector(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round Robin time slice, always at least one time unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Time);

impl TimeQuantum {
    pub fn new(units: i64) -> SchedulerResult<Self> {
        match Time::try_from(units) {
            Ok(units) if units > 0 => Ok(Self(units)),
            _ => Err(SchedulerError::InvalidQuantum(units)),
        }
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = i64::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}
