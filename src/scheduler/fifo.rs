use std::collections::VecDeque;

use super::{Dispatch, DispatchError, Scheduler, SimCtx, Slot};

/// First-come first-served: input order, each process runs to completion.
#[derive(Debug, Default)]
pub struct FifoScheduler {
    ready: VecDeque<Slot>,
}

impl FifoScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FifoScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
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
            slice: ctx.proc(slot).remaining_time,
        })
    }
}
