use log::info;

use super::metrics::{self, Metrics};
use crate::{
    core::{Process, SchedCore, SimEvent, Ticks, Timeline},
    error::SimError,
    scheduler::Scheduler,
};

/// Result of running one policy to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub policy: &'static str,
    /// The policy's own copy of the input, with remaining and completion times filled in.
    pub processes: Vec<Process>,
    pub timeline: Timeline,
}

impl Run {
    pub fn makespan(&self) -> Ticks {
        self.timeline.iter().map(|c| c.time).max().unwrap_or(0)
    }

    pub fn metrics(&self) -> Result<Metrics, SimError> {
        metrics::calculate(&self.processes)
    }
}

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
}

impl<S: Scheduler> Sim<S> {
    /// The caller's records are cloned; they are never mutated by the run.
    pub fn new(processes: &[Process], scheduler: S) -> Result<Self, SimError> {
        let core = SchedCore::new(processes.to_vec(), scheduler)?;
        Ok(Self { core })
    }

    pub fn step(&mut self) -> Result<Vec<SimEvent>, SimError> {
        self.core.step()
    }

    pub fn all_processes_completed(&self) -> bool {
        self.core.ctx.all_completed()
    }

    pub fn run(mut self) -> Result<Run, SimError> {
        while !self.all_processes_completed() {
            self.step()?;
        }

        let name = self.core.scheduler.name();
        info!(
            "{name}: {} processes done at t={} after {} slices",
            self.core.ctx.len(),
            self.core.now(),
            self.core.observer().steps()
        );

        let ctx = self.core.ctx;
        Ok(Run {
            policy: name,
            processes: ctx.procs,
            timeline: ctx.timeline,
        })
    }
}
