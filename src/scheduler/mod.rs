pub mod fifo;
pub mod microtubule;
pub mod priq;
pub mod rr;

use thiserror::Error;

use crate::core::{
    Ticks,
    state::{ProcessId, SimCtx, Slot},
};
pub use fifo::FifoScheduler;
pub use microtubule::{Jitter, MicrotubuleScheduler, WeightModel};
pub use priq::PriqScheduler;
pub use rr::RoundRobinScheduler;

pub const RR_SLICE_DFL: Ticks = 3;
pub const MT_SLICE_MIN: Ticks = 1;
pub const MT_SLICE_MAX: Ticks = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("no runnable process while {active} remain active")]
    NoRunnableProcess { active: usize },
    #[error("process {id} was dispatched without remaining work")]
    NotRunnable { id: ProcessId },
    #[error("weights of all {active} active processes sum to zero")]
    DegenerateWeights { active: usize },
}

/// Run `slot` for up to `slice` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub slot: Slot,
    pub slice: Ticks,
}

pub trait Scheduler {
    fn name(&self) -> &'static str;

    fn init(&mut self, ctx: &SimCtx);

    fn dispatch(&mut self, ctx: &SimCtx) -> Result<Dispatch, DispatchError>;

    // Called after every slice; `runnable` is false once the process completed
    fn stopping(&mut self, _ctx: &SimCtx, _slot: Slot, _runnable: bool) {}
}
