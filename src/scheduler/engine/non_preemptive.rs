/*!
 * Non-preemptive Dispatch
 * FCFS and the run-to-completion policies (SJF, Priority, HRRN, LJF)
 */

use super::WorkingSet;
use crate::core::errors::SchedulerResult;
use crate::scheduler::clock::IdleRule;
use crate::scheduler::criteria::Criterion;

impl WorkingSet {
    /// FCFS: stable sort by arrival, then run each process in turn
    pub(super) fn run_sequential(&mut self) {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by_key(|&index| self.records[index].arrival_time);

        for index in order {
            self.clock.advance_to(self.records[index].arrival_time);
            self.run_to_end(index);
        }
    }

    /// Select by `criterion` among arrived processes and run the pick to completion.
    /// When nothing has arrived the clock jumps to the first pending process in
    /// index order and selection is retried.
    pub(super) fn run_to_completion(&mut self, criterion: Criterion) -> SchedulerResult<()> {
        while !self.is_done() {
            match criterion.select(&self.records, self.clock.now()) {
                Some(index) => self.run_to_end(index),
                None => {
                    self.idle(IdleRule::FirstPending)?;
                }
            }
        }
        Ok(())
    }

    fn run_to_end(&mut self, index: usize) {
        let remaining = self.records[index].remaining_time;
        self.dispatch(index, remaining);
    }
}
