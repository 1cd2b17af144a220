use average::{Estimate, Mean};

use crate::{
    core::{Process, ProcessId, Ticks},
    error::{InvalidInput, SimError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub id: ProcessId,
    /// Completion minus arrival; arrival is always 0.
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub per_process: Vec<ProcessMetrics>,
    pub avg_turnaround_time: f64,
    pub avg_waiting_time: f64,
    /// Completed processes per tick of makespan.
    pub throughput: f64,
    pub makespan: Ticks,
}

/// Reduces completed records to turnaround/waiting statistics.
///
/// Every record must carry a completion time. An empty set and a zero makespan
/// are reported as errors rather than producing NaN or infinity.
pub fn calculate(processes: &[Process]) -> Result<Metrics, SimError> {
    if processes.is_empty() {
        return Err(InvalidInput::EmptyProcessSet.into());
    }

    let per_process = processes
        .iter()
        .map(process_metrics)
        .collect::<Result<Vec<_>, _>>()?;

    let makespan = per_process
        .iter()
        .map(|m| m.turnaround_time)
        .max()
        .unwrap_or(0);
    if makespan == 0 {
        return Err(SimError::ZeroThroughputDivisor);
    }

    let avg_turnaround_time = avg(per_process.iter().map(|m| m.turnaround_time));
    let avg_waiting_time = avg(per_process.iter().map(|m| m.waiting_time));

    Ok(Metrics {
        throughput: per_process.len() as f64 / makespan as f64,
        per_process,
        avg_turnaround_time,
        avg_waiting_time,
        makespan,
    })
}

fn process_metrics(process: &Process) -> Result<ProcessMetrics, InvalidInput> {
    let turnaround_time = process
        .completion_time
        .ok_or(InvalidInput::Incomplete { id: process.id })?;
    let waiting_time = turnaround_time.checked_sub(process.burst_time).ok_or(
        InvalidInput::CompletedBeforeBurst {
            id: process.id,
            completion: turnaround_time,
            burst: process.burst_time,
        },
    )?;

    Ok(ProcessMetrics {
        id: process.id,
        turnaround_time,
        waiting_time,
    })
}

fn avg(iter: impl Iterator<Item = Ticks>) -> f64 {
    iter.map(|t| t as f64).collect::<Mean>().estimate()
}
