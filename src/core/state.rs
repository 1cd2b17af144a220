use super::event::{Completion, Timeline};

// Index into SimCtx::procs, equal to the process's position in the input
pub type Slot = usize;
pub type ProcessId = u64;
// Integer priorities only; real-valued urgency belongs in the weight model
pub type Priority = u32;
pub type Ticks = u64;

/// One schedulable unit of work. All processes arrive at time 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub burst_time: Ticks,
    /// Lower runs first under the priority policy; higher is favoured by the
    /// probabilistic policy's weight function.
    pub priority: Priority,
    pub remaining_time: Ticks,
    // Written exactly once, when remaining_time reaches zero
    pub completion_time: Option<Ticks>,
}

impl Process {
    pub fn new(id: ProcessId, burst_time: Ticks, priority: Priority) -> Self {
        Self {
            id,
            burst_time,
            priority,
            remaining_time: burst_time,
            completion_time: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_time > 0
    }

    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    pub fn executed_time(&self) -> Ticks {
        self.burst_time - self.remaining_time
    }
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub procs: Vec<Process>,
    pub timeline: Timeline,
}

impl SimCtx {
    pub fn new(procs: Vec<Process>) -> Self {
        let timeline = Timeline::with_capacity(procs.len());
        Self {
            now: 0,
            procs,
            timeline,
        }
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        // Bounded by the total burst, which is checked on input
        self.now += delta;
    }

    pub fn proc(&self, slot: Slot) -> &Process {
        &self.procs[slot]
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        0..self.procs.len()
    }

    pub fn active_count(&self) -> usize {
        self.procs.iter().filter(|p| p.is_active()).count()
    }

    pub fn all_completed(&self) -> bool {
        self.procs.iter().all(Process::is_completed)
    }

    /// Runs `slot` for `min(slice, remaining_time)` ticks, advancing the clock.
    ///
    /// Returns the ticks actually consumed and, if the process finished, the
    /// completion appended to the timeline.
    pub fn run_slice(&mut self, slot: Slot, slice: Ticks) -> (Ticks, Option<Completion>) {
        debug_assert!(slice > 0, "Dispatched slice must be positive");
        let remaining = self.procs[slot].remaining_time;
        debug_assert!(
            remaining > 0,
            "Process {} dispatched with no remaining work",
            self.procs[slot].id
        );

        let exec_time = slice.min(remaining);
        self.advance_time(exec_time);
        self.procs[slot].remaining_time -= exec_time;

        if self.procs[slot].remaining_time == 0 {
            return (exec_time, Some(self.mark_completed(slot)));
        }
        (exec_time, None)
    }

    fn mark_completed(&mut self, slot: Slot) -> Completion {
        let now = self.now;
        let process = &mut self.procs[slot];
        debug_assert!(
            process.completion_time.is_none(),
            "Process {} completed twice",
            process.id
        );

        process.completion_time = Some(now);
        let completion = Completion {
            id: process.id,
            time: now,
        };
        self.timeline.push(completion);
        completion
    }
}
