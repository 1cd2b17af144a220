pub mod driver;
pub mod generate;
pub mod metrics;
pub mod policy;

pub use driver::{Run, Sim};
pub use metrics::{Metrics, ProcessMetrics};
pub use policy::{Policy, fcfs, priority, probabilistic, probabilistic_with_rng, round_robin};
