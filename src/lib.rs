pub mod config;
pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use crate::config::{ProbabilisticConfig, RoundRobinConfig};
pub use crate::core::{Completion, Priority, Process, ProcessId, SimEvent, Ticks, Timeline};
pub use crate::error::{InvalidInput, SimError};
pub use crate::scheduler::Scheduler;
pub use crate::sim::{Metrics, Policy, ProcessMetrics, Run, Sim};
