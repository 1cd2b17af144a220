//! One entry point per scheduling policy.
//!
//! Each function takes the caller's records by shared reference and runs on its
//! own clone, so the same input can be fed to every policy in turn.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::driver::{Run, Sim};
use crate::{
    config::{ProbabilisticConfig, RoundRobinConfig},
    core::Process,
    error::SimError,
    scheduler::{FifoScheduler, MicrotubuleScheduler, PriqScheduler, RoundRobinScheduler},
};

/// Runs every process to completion in input order.
pub fn fcfs(processes: &[Process]) -> Result<Run, SimError> {
    Sim::new(processes, FifoScheduler::new())?.run()
}

pub fn round_robin(processes: &[Process], config: &RoundRobinConfig) -> Result<Run, SimError> {
    let quantum = config.validate()?;
    Sim::new(processes, RoundRobinScheduler::new(quantum))?.run()
}

/// Runs every process to completion, lowest priority value first.
pub fn priority(processes: &[Process]) -> Result<Run, SimError> {
    Sim::new(processes, PriqScheduler::new())?.run()
}

/// Seeds a fresh generator from `config.random_seed`, or from the OS when unset.
pub fn probabilistic(
    processes: &[Process],
    config: &ProbabilisticConfig,
) -> Result<Run, SimError> {
    let rng = match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    probabilistic_with_rng(processes, config, rng)
}

/// Like [`probabilistic`] but draws from `rng`; `config.random_seed` is ignored.
pub fn probabilistic_with_rng<R: Rng>(
    processes: &[Process],
    config: &ProbabilisticConfig,
    rng: R,
) -> Result<Run, SimError> {
    let slices = config.validate()?;
    let scheduler = MicrotubuleScheduler::new(rng, slices)
        .with_weight_model(config.weight_model)
        .with_jitter(config.jitter);
    Sim::new(processes, scheduler)?.run()
}

/// A configured policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    Fcfs,
    RoundRobin(RoundRobinConfig),
    Priority,
    Probabilistic(ProbabilisticConfig),
}

impl Policy {
    pub fn all(rr: RoundRobinConfig, mt: ProbabilisticConfig) -> [Policy; 4] {
        [
            Policy::Fcfs,
            Policy::RoundRobin(rr),
            Policy::Priority,
            Policy::Probabilistic(mt),
        ]
    }

    pub fn run(&self, processes: &[Process]) -> Result<Run, SimError> {
        match self {
            Policy::Fcfs => fcfs(processes),
            Policy::RoundRobin(config) => round_robin(processes, config),
            Policy::Priority => priority(processes),
            Policy::Probabilistic(config) => probabilistic(processes, config),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::RoundRobin(config) => write!(f, "Round Robin (quantum {})", config.quantum),
            Policy::Priority => write!(f, "Priority"),
            Policy::Probabilistic(config) => write!(
                f,
                "Microtubule (quantum {}..={})",
                config.min_quantum, config.max_quantum
            ),
        }
    }
}
