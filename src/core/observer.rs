#[cfg(debug_assertions)]
use rustc_hash::FxHashSet;

#[cfg(debug_assertions)]
use super::state::{ProcessId, Ticks};
use super::state::SimCtx;

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    // Timeline entries already checked
    #[cfg(debug_assertions)]
    timeline_cursor: usize,
    #[cfg(debug_assertions)]
    completed: FxHashSet<ProcessId>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;
        #[cfg(debug_assertions)]
        self.check(ctx);
        #[cfg(not(debug_assertions))]
        let _ = ctx;
    }

    #[cfg(debug_assertions)]
    fn check(&mut self, ctx: &SimCtx) {
        let mut executed: Ticks = 0;
        for process in &ctx.procs {
            assert!(
                process.remaining_time <= process.burst_time,
                "Process {} remaining {} exceeds burst {}",
                process.id,
                process.remaining_time,
                process.burst_time
            );
            assert_eq!(
                process.is_completed(),
                process.remaining_time == 0,
                "Process {} completion_time out of sync with remaining_time",
                process.id
            );
            executed += process.executed_time();
        }

        // Time only moves while some process executes
        assert_eq!(
            executed, ctx.now,
            "Clock {} disagrees with executed work {executed}",
            ctx.now
        );

        for completion in &ctx.timeline[self.timeline_cursor..] {
            let fresh = self.completed.insert(completion.id);
            assert!(fresh, "Process {} appears twice in timeline", completion.id);
            assert!(
                completion.time <= ctx.now,
                "Process {} completed in the future",
                completion.id
            );
        }
        self.timeline_cursor = ctx.timeline.len();
    }
}
