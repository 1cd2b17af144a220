use std::{collections::VecDeque, num::NonZeroU64};

use super::{Dispatch, DispatchError, Scheduler, SimCtx, Slot};

/// Round robin over a FIFO ready queue with a fixed quantum.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    ready: VecDeque<Slot>,
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            ready: VecDeque::new(),
            quantum,
        }
    }

    pub fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn init(&mut self, ctx: &SimCtx) {
        self.ready = ctx.slots().collect();
    }

    fn dispatch(&mut self, ctx: &SimCtx) -> Result<Dispatch, DispatchError> {
        let slot = self
            .ready
            .pop_front()
            .ok_or(DispatchError::NoRunnableProcess {
                active: ctx.active_count(),
            })?;
        Ok(Dispatch {
            slot,
            slice: self.quantum.get(),
        })
    }

    fn stopping(&mut self, _ctx: &SimCtx, slot: Slot, runnable: bool) {
        if runnable {
            self.ready.push_back(slot);
        }
    }
}
