use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{Dispatch, DispatchError, Scheduler, SimCtx, Slot};
use crate::core::Priority;

/// Non-preemptive static priority. Lower values run first; equal priorities
/// keep their input order.
#[derive(Debug)]
pub struct PriqScheduler {
    ready: KeyedPriorityQueue<Slot, RunKey>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct RunKey {
    priority: Priority,
    slot: Slot,
}

// KeyedPriorityQueue is a max-heap, so the smallest (priority, slot) must compare greatest
impl PartialOrd for RunKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RunKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.priority, other.slot).cmp(&(self.priority, self.slot))
    }
}

impl PriqScheduler {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }
}

impl Default for PriqScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PriqScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn init(&mut self, ctx: &SimCtx) {
        self.ready = KeyedPriorityQueue::with_capacity(ctx.len());
        for slot in ctx.slots() {
            let priority = ctx.proc(slot).priority;
            self.ready.push(slot, RunKey { priority, slot });
        }
    }

    fn dispatch(&mut self, ctx: &SimCtx) -> Result<Dispatch, DispatchError> {
        let (slot, _) = self
            .ready
            .pop()
            .ok_or(DispatchError::NoRunnableProcess {
                active: ctx.active_count(),
            })?;
        Ok(Dispatch {
            slot,
            slice: ctx.proc(slot).remaining_time,
        })
    }
}
