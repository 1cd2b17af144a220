use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::{
    event::SimEvent,
    observer::Observer,
    state::{Process, SimCtx, Ticks},
};
use crate::{
    error::{InvalidInput, SimError},
    scheduler::{Dispatch, DispatchError, Scheduler},
};

pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(procs: Vec<Process>, mut scheduler: S) -> Result<Self, SimError> {
        validate(&procs)?;
        let ctx = SimCtx::new(procs);
        scheduler.init(&ctx);
        Ok(Self {
            ctx,
            scheduler,
            observer: Observer::new(),
        })
    }

    /// Dispatches one slice. Returns no events once every process has completed.
    pub fn step(&mut self) -> Result<Vec<SimEvent>, SimError> {
        if self.ctx.all_completed() {
            return Ok(Vec::new());
        }

        let Dispatch { slot, slice } = self.scheduler.dispatch(&self.ctx)?;
        if !self.ctx.proc(slot).is_active() {
            return Err(DispatchError::NotRunnable {
                id: self.ctx.proc(slot).id,
            }
            .into());
        }

        let start = self.ctx.now;
        let id = self.ctx.proc(slot).id;
        let (ticks, completion) = self.ctx.run_slice(slot, slice);
        trace!(
            "{}: t={start} ran process {id} for {ticks} ticks",
            self.scheduler.name()
        );

        self.scheduler
            .stopping(&self.ctx, slot, completion.is_none());
        self.observer.observe(&self.ctx);

        let mut events = vec![SimEvent::Ran { id, start, ticks }];
        if let Some(completion) = completion {
            debug!(
                "{}: process {} completed at t={}",
                self.scheduler.name(),
                completion.id,
                completion.time
            );
            events.push(SimEvent::Completed(completion));
        }
        Ok(events)
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}

// Records must be fresh: positive burst, untouched scheduling state, unique ids,
// and a total burst the clock can represent
fn validate(procs: &[Process]) -> Result<(), InvalidInput> {
    let mut seen = FxHashSet::default();
    let mut total: Ticks = 0;
    for process in procs {
        if process.burst_time == 0 {
            return Err(InvalidInput::ZeroBurst { id: process.id });
        }
        total = total
            .checked_add(process.burst_time)
            .ok_or(InvalidInput::BurstOverflow { id: process.id })?;
        if process.remaining_time != process.burst_time || process.completion_time.is_some() {
            return Err(InvalidInput::Stale { id: process.id });
        }
        if !seen.insert(process.id) {
            return Err(InvalidInput::DuplicateId { id: process.id });
        }
    }
    Ok(())
}
