use thiserror::Error;

use crate::{
    core::{ProcessId, Ticks},
    scheduler::DispatchError,
};

/// Malformed input; the simulation aborts instead of skipping the offender.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("process {id} has a zero burst time")]
    ZeroBurst { id: ProcessId },

    #[error("total burst time overflows the clock at process {id}")]
    BurstOverflow { id: ProcessId },

    #[error("process id {id} appears more than once")]
    DuplicateId { id: ProcessId },

    #[error("process {id} already carries scheduling state, pass a fresh copy")]
    Stale { id: ProcessId },

    #[error("round robin quantum must be positive")]
    ZeroQuantum,

    #[error("quantum range {min}..={max} must be non-empty and start above zero")]
    QuantumRange { min: Ticks, max: Ticks },

    #[error("weight model coefficients must be finite and non-negative")]
    WeightModel,

    #[error("jitter factors must be finite, positive and ordered low..=high")]
    Jitter,

    #[error("metrics need at least one process")]
    EmptyProcessSet,

    #[error("process {id} has not completed")]
    Incomplete { id: ProcessId },

    #[error("process {id} completed at {completion} before its burst of {burst}")]
    CompletedBeforeBurst {
        id: ProcessId,
        completion: Ticks,
        burst: Ticks,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("throughput undefined: latest completion time is 0")]
    ZeroThroughputDivisor,
}

impl SimError {
    pub fn is_degenerate_weights(&self) -> bool {
        matches!(self, Self::Dispatch(DispatchError::DegenerateWeights { .. }))
    }
}
