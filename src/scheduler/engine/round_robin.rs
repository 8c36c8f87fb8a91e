/*!
 * Round Robin Dispatch
 * Unbounded FIFO ready queue with a fixed time quantum
 */

use super::WorkingSet;
use crate::core::errors::SchedulerResult;
use crate::scheduler::clock::next_arrival_after;
use crate::scheduler::types::TimeQuantum;
use std::collections::VecDeque;
use tracing::debug;

impl WorkingSet {
    pub(super) fn run_round_robin(&mut self, quantum: TimeQuantum) -> SchedulerResult<()> {
        let n = self.records.len();
        // A process re-enters the queue once per unfinished turn, so it must grow
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut queued = vec![false; n];

        for (index, record) in self.records.iter().enumerate() {
            if record.arrival_time == 0 {
                ready.push_back(index);
                queued[index] = true;
            }
        }

        while !self.is_done() {
            let index = match ready.pop_front() {
                Some(index) => index,
                None => {
                    // Only the single soonest arrival is admitted here; others
                    // arriving at the same instant join in the sweep below
                    let next = next_arrival_after(&self.records, self.clock.now())
                        .ok_or_else(|| self.stalled())?;
                    let arrival = self.records[next].arrival_time;
                    debug!(from = self.clock.now(), to = arrival, "cpu idle");
                    self.clock.advance_to(arrival);
                    queued[next] = true;
                    next
                }
            };

            self.dispatch(index, quantum.get());
            if !self.records[index].is_complete() {
                ready.push_back(index);
            }

            let now = self.clock.now();
            for (i, record) in self.records.iter().enumerate() {
                if !queued[i] && record.is_runnable(now) {
                    ready.push_back(i);
                    queued[i] = true;
                }
            }
        }
        Ok(())
    }
}
