pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::SchedCore;
pub use event::{Completion, SimEvent, Timeline};
pub use state::{Priority, Process, ProcessId, SimCtx, Slot, Ticks};
