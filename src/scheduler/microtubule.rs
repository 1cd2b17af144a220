//! Microtubule-inspired probabilistic scheduling.
//!
//! Every step each unfinished process is weighted by its [`WeightModel`],
//! `priority / burst_time` by default (higher priority and shorter jobs are
//! favoured). With a [`Jitter`] set, every weight is then scaled by a fresh
//! uniform factor so the preferred process drifts from step to step. The
//! weights are normalized over the whole process set, with finished processes
//! pinned at zero, and one process is sampled from that distribution. It then
//! runs for a slice drawn uniformly from `[min_quantum, max_quantum]`,
//! mimicking the random growth/shrink events of microtubule dynamic instability.

use std::ops::RangeInclusive;

use log::warn;
use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
};

use super::{Dispatch, DispatchError, Scheduler, SimCtx};
use crate::core::{Process, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WeightModel {
    /// `priority / burst_time`
    #[default]
    PriorityOverBurst,
    /// `alpha / burst_time + beta * priority`
    Blend { alpha: f64, beta: f64 },
}

impl WeightModel {
    pub const BLEND_DFL: WeightModel = WeightModel::Blend {
        alpha: 0.5,
        beta: 0.5,
    };

    // Static burst_time keeps a process's urgency fixed across its own partial runs
    pub fn weight(&self, process: &Process) -> f64 {
        if !process.is_active() {
            return 0.0;
        }
        let burst = process.burst_time as f64;
        let priority = f64::from(process.priority);
        match *self {
            WeightModel::PriorityOverBurst => priority / burst,
            WeightModel::Blend { alpha, beta } => alpha / burst + beta * priority,
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            WeightModel::PriorityOverBurst => true,
            WeightModel::Blend { alpha, beta } => {
                alpha.is_finite() && beta.is_finite() && alpha >= 0.0 && beta >= 0.0
            }
        }
    }
}

/// Per-step multiplicative noise on every weight, drawn from `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    pub low: f64,
    pub high: f64,
}

impl Jitter {
    pub const DFL: Jitter = Jitter {
        low: 0.8,
        high: 1.2,
    };

    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low > 0.0 && self.low <= self.high
    }
}

pub struct MicrotubuleScheduler<R: Rng> {
    rng: R,
    slices: RangeInclusive<Ticks>,
    model: WeightModel,
    jitter: Option<Jitter>,
    // Live weights, refreshed every dispatch
    weights: Vec<f64>,
}

impl<R: Rng> MicrotubuleScheduler<R> {
    /// `slices` must be a non-empty range starting at 1 or more.
    pub fn new(rng: R, slices: RangeInclusive<Ticks>) -> Self {
        debug_assert!(
            *slices.start() > 0 && slices.start() <= slices.end(),
            "Slice range must be non-empty and positive"
        );
        Self {
            rng,
            slices,
            model: WeightModel::default(),
            jitter: None,
            weights: Vec::new(),
        }
    }

    pub fn with_weight_model(mut self, model: WeightModel) -> Self {
        debug_assert!(
            model.is_valid(),
            "Weight model coefficients must be finite and non-negative"
        );
        self.model = model;
        self
    }

    pub fn with_jitter(mut self, jitter: Option<Jitter>) -> Self {
        debug_assert!(
            jitter.is_none_or(|j| j.is_valid()),
            "Jitter range must be positive and ordered"
        );
        self.jitter = jitter;
        self
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn refresh_weights(&mut self, ctx: &SimCtx) -> f64 {
        self.weights.clear();
        for process in &ctx.procs {
            let mut w = self.model.weight(process);
            // One factor per process every step, finished ones included
            if let Some(Jitter { low, high }) = self.jitter {
                w *= self.rng.random_range(low..=high);
            }
            self.weights.push(w);
        }
        self.weights.iter().sum()
    }
}

impl<R: Rng> Scheduler for MicrotubuleScheduler<R> {
    fn name(&self) -> &'static str {
        "Microtubule"
    }

    fn init(&mut self, ctx: &SimCtx) {
        self.weights = Vec::with_capacity(ctx.len());
    }

    fn dispatch(&mut self, ctx: &SimCtx) -> Result<Dispatch, DispatchError> {
        let active = ctx.active_count();
        if active == 0 {
            return Err(DispatchError::NoRunnableProcess { active });
        }

        let total = self.refresh_weights(ctx);
        if total <= 0.0 {
            warn!("{active} active processes left with zero total weight");
            return Err(DispatchError::DegenerateWeights { active });
        }

        for w in &mut self.weights {
            *w /= total;
        }
        let dist = WeightedIndex::new(&self.weights)
            .map_err(|_| DispatchError::DegenerateWeights { active })?;
        let slot = dist.sample(&mut self.rng);
        let slice = self.rng.random_range(self.slices.clone());

        Ok(Dispatch { slot, slice })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn ctx(procs: &[(Ticks, u32)]) -> SimCtx {
        SimCtx::new(
            procs
                .iter()
                .enumerate()
                .map(|(i, &(burst, prio))| Process::new(i as u64 + 1, burst, prio))
                .collect(),
        )
    }

    #[test]
    fn weight_is_priority_over_static_burst() {
        let model = WeightModel::default();
        let mut p = Process::new(1, 4, 2);
        assert_eq!(model.weight(&p), 0.5);
        p.remaining_time = 1;
        assert_eq!(model.weight(&p), 0.5);
        p.remaining_time = 0;
        assert_eq!(model.weight(&p), 0.0);
    }

    #[test]
    fn blend_mixes_inverse_burst_and_priority() {
        let model = WeightModel::BLEND_DFL;
        assert_eq!(model.weight(&Process::new(1, 4, 2)), 1.125);
        assert_eq!(model.weight(&Process::new(2, 2, 0)), 0.25);
        let custom = WeightModel::Blend {
            alpha: 2.0,
            beta: 0.0,
        };
        assert_eq!(custom.weight(&Process::new(3, 8, 5)), 0.25);
        assert!(
            !WeightModel::Blend {
                alpha: -1.0,
                beta: 0.5
            }
            .is_valid()
        );
    }

    #[test]
    fn blend_lets_zero_priority_make_progress() {
        let ctx = ctx(&[(3, 0), (5, 0)]);
        let mut sched = MicrotubuleScheduler::new(StdRng::seed_from_u64(0), 1..=3)
            .with_weight_model(WeightModel::BLEND_DFL);
        sched.init(&ctx);
        assert!(sched.dispatch(&ctx).is_ok());
        assert!((sched.weights()[0] - 0.625).abs() < 1e-12);
    }

    #[test]
    fn jitter_keeps_weights_within_factor_bounds() {
        let ctx = ctx(&[(4, 2), (4, 2), (4, 2)]);
        let mut sched = MicrotubuleScheduler::new(StdRng::seed_from_u64(9), 1..=3)
            .with_jitter(Some(Jitter::DFL));
        sched.init(&ctx);

        let mut saw_uneven = false;
        for _ in 0..20 {
            sched.dispatch(&ctx).unwrap();
            let w = sched.weights();
            let (min, max) = w
                .iter()
                .fold((f64::MAX, f64::MIN), |(lo, hi), &x| (lo.min(x), hi.max(x)));
            assert!(max / min <= 1.2 / 0.8 + 1e-12);
            saw_uneven |= max - min > 1e-9;
        }
        assert!(saw_uneven);
    }

    #[test]
    fn jitter_range_validation() {
        assert!(Jitter::DFL.is_valid());
        assert!(Jitter { low: 1.0, high: 1.0 }.is_valid());
        assert!(!Jitter { low: 0.0, high: 1.2 }.is_valid());
        assert!(!Jitter { low: 1.2, high: 0.8 }.is_valid());
        assert!(!Jitter { low: f64::NAN, high: 1.0 }.is_valid());
    }

    #[test]
    fn dispatch_normalizes_weights_over_all_processes() {
        let mut ctx = ctx(&[(2, 1), (4, 2), (8, 2)]);
        ctx.run_slice(0, 2);

        let mut sched = MicrotubuleScheduler::new(StdRng::seed_from_u64(1), 1..=3);
        sched.init(&ctx);
        let dispatch = sched.dispatch(&ctx).unwrap();

        assert_eq!(sched.weights().len(), 3);
        assert_eq!(sched.weights()[0], 0.0);
        let sum: f64 = sched.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((sched.weights()[1] - 2.0 / 3.0).abs() < 1e-12);
        assert_ne!(dispatch.slot, 0);
        assert!((1..=3).contains(&dispatch.slice));
    }

    #[test]
    fn zero_priority_is_degenerate() {
        let ctx = ctx(&[(3, 0), (5, 0)]);
        let mut sched = MicrotubuleScheduler::new(StdRng::seed_from_u64(0), 1..=3);
        sched.init(&ctx);
        assert_eq!(
            sched.dispatch(&ctx),
            Err(DispatchError::DegenerateWeights { active: 2 })
        );
    }

    #[test]
    fn finished_set_has_nothing_to_dispatch() {
        let mut ctx = ctx(&[(1, 1)]);
        ctx.run_slice(0, 1);
        let mut sched = MicrotubuleScheduler::new(StdRng::seed_from_u64(0), 1..=3);
        sched.init(&ctx);
        assert_eq!(
            sched.dispatch(&ctx),
            Err(DispatchError::NoRunnableProcess { active: 0 })
        );
    }
}
