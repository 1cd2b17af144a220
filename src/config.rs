//! Policy parameters.

use std::{num::NonZeroU64, ops::RangeInclusive};

use crate::{
    core::Ticks,
    error::InvalidInput,
    scheduler::{Jitter, MT_SLICE_MAX, MT_SLICE_MIN, RR_SLICE_DFL, WeightModel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinConfig {
    /// Longest contiguous slice before the process goes to the back of the queue.
    pub quantum: Ticks,
}

impl Default for RoundRobinConfig {
    fn default() -> Self {
        Self {
            quantum: RR_SLICE_DFL,
        }
    }
}

impl RoundRobinConfig {
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }

    pub fn validate(&self) -> Result<NonZeroU64, InvalidInput> {
        NonZeroU64::new(self.quantum).ok_or(InvalidInput::ZeroQuantum)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilisticConfig {
    pub min_quantum: Ticks,
    pub max_quantum: Ticks,
    /// Seeds the policy's own generator. `None` draws a seed from the OS.
    pub random_seed: Option<u64>,
    pub weight_model: WeightModel,
    /// Off by default; [`Jitter::DFL`] rescales weights by 0.8..=1.2 each step.
    pub jitter: Option<Jitter>,
}

impl Default for ProbabilisticConfig {
    fn default() -> Self {
        Self {
            min_quantum: MT_SLICE_MIN,
            max_quantum: MT_SLICE_MAX,
            random_seed: None,
            weight_model: WeightModel::default(),
            jitter: None,
        }
    }
}

impl ProbabilisticConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_quantum_range(mut self, min_quantum: Ticks, max_quantum: Ticks) -> Self {
        self.min_quantum = min_quantum;
        self.max_quantum = max_quantum;
        self
    }

    pub fn with_weight_model(mut self, weight_model: WeightModel) -> Self {
        self.weight_model = weight_model;
        self
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = Some(jitter);
        self
    }

    /// Checks every setting and returns the slice range to draw from.
    pub fn validate(&self) -> Result<RangeInclusive<Ticks>, InvalidInput> {
        if !self.weight_model.is_valid() {
            return Err(InvalidInput::WeightModel);
        }
        if self.jitter.is_some_and(|j| !j.is_valid()) {
            return Err(InvalidInput::Jitter);
        }
        if self.min_quantum == 0 || self.min_quantum > self.max_quantum {
            return Err(InvalidInput::QuantumRange {
                min: self.min_quantum,
                max: self.max_quantum,
            });
        }
        Ok(self.min_quantum..=self.max_quantum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(RoundRobinConfig::default().quantum, 3);
        let mt = ProbabilisticConfig::default();
        assert_eq!((mt.min_quantum, mt.max_quantum, mt.random_seed), (1, 3, None));
        assert_eq!(mt.weight_model, WeightModel::PriorityOverBurst);
        assert_eq!(mt.jitter, None);
        assert_eq!(mt.validate(), Ok(1..=3));
    }

    #[test]
    fn zero_quantum_rejected() {
        assert_eq!(
            RoundRobinConfig::new(0).validate(),
            Err(InvalidInput::ZeroQuantum)
        );
    }

    #[test]
    fn bad_quantum_ranges_rejected() {
        for (min, max) in [(0, 3), (4, 2)] {
            let config = ProbabilisticConfig::default().with_quantum_range(min, max);
            assert_eq!(
                config.validate(),
                Err(InvalidInput::QuantumRange { min, max })
            );
        }
        let single = ProbabilisticConfig::default().with_quantum_range(2, 2);
        assert_eq!(single.validate(), Ok(2..=2));
    }

    #[test]
    fn bad_weight_settings_rejected() {
        let jitter = ProbabilisticConfig::default().with_jitter(Jitter {
            low: 1.5,
            high: 0.5,
        });
        assert_eq!(jitter.validate(), Err(InvalidInput::Jitter));

        let model = ProbabilisticConfig::default().with_weight_model(WeightModel::Blend {
            alpha: f64::INFINITY,
            beta: 0.5,
        });
        assert_eq!(model.validate(), Err(InvalidInput::WeightModel));

        let ok = ProbabilisticConfig::default()
            .with_jitter(Jitter::DFL)
            .with_weight_model(WeightModel::BLEND_DFL);
        assert_eq!(ok.validate(), Ok(1..=3));
    }
}
