/*!
 * Dispatch Timeline
 * Ordered CPU slices of a run, the data behind a Gantt chart
 */

use crate::core::types::{Pid, Time};
use serde::{Deserialize, Serialize};

/// Contiguous interval during which one process held the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
}

impl Slice {
    #[inline]
    pub const fn duration(&self) -> Time {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slice, merging it into the previous one when the same
    /// process simply kept running
    pub fn record(&mut self, pid: Pid, start: Time, end: Time) {
        if start == end {
            return;
        }

        match self.slices.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end = end,
            _ => self.slices.push(Slice { pid, start, end }),
        }
    }

    /// Total time the CPU was busy
    pub fn busy_time(&self) -> Time {
        self.slices.iter().map(Slice::duration).sum()
    }

    pub fn into_slices(self) -> Vec<Slice> {
        self.slices
    }
}
