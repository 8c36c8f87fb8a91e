/*!
 * Preemptive Unit-step Dispatch
 * SRJF and LRJF re-select after every time unit, except the first unit
 * after an idle gap
 */

use super::WorkingSet;
use crate::core::errors::SchedulerResult;
use crate::scheduler::clock::{earliest_pending, IdleRule};
use crate::scheduler::criteria::Criterion;

impl WorkingSet {
    pub(super) fn run_unit_step(&mut self, criterion: Criterion) -> SchedulerResult<()> {
        while !self.is_done() {
            match criterion.select(&self.records, self.clock.now()) {
                Some(index) => self.dispatch(index, 1),
                None => {
                    // The earliest arrival takes the first unit after an idle gap
                    let index = earliest_pending(&self.records).ok_or_else(|| self.stalled())?;
                    self.idle(IdleRule::EarliestPending)?;
                    self.dispatch(index, 1);
                }
            }
        }
        Ok(())
    }
}
