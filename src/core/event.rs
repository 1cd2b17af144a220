use crate::core::{ProcessId, Ticks};

/// A process finishing at absolute simulated time `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub id: ProcessId,
    pub time: Ticks,
}

// Completions in the order they happened; one entry per process
pub type Timeline = Vec<Completion>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Ran {
        id: ProcessId,
        start: Ticks,
        ticks: Ticks,
    },
    Completed(Completion),
}
