//! Input sets for the simulator.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::core::{Priority, Process, Ticks};

pub const BURST_RANGE: RangeInclusive<Ticks> = 3..=10;
pub const PRIORITY_RANGE: RangeInclusive<Priority> = 1..=5;

/// `count` processes with ids `1..=count` and uniformly drawn burst and priority.
pub fn random_processes<R: Rng>(rng: &mut R, count: usize) -> Vec<Process> {
    (1..=count as u64)
        .map(|id| {
            let burst_time = rng.random_range(BURST_RANGE);
            let priority = rng.random_range(PRIORITY_RANGE);
            Process::new(id, burst_time, priority)
        })
        .collect()
}

pub fn demo_processes() -> Vec<Process> {
    vec![
        Process::new(1, 7, 3),
        Process::new(2, 4, 2),
        Process::new(3, 9, 1),
        Process::new(4, 5, 4),
    ]
}
