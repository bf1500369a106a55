//! Drift Updater
//!
//! After every example a set of dimensions is selected, their weights are
//! moved one step along their directions, each of those directions may
//! reverse, and the threshold is recomputed.

use rand::Rng;
use std::collections::BTreeSet;
use tracing::trace;

use super::hyperplane::HyperplaneState;
use crate::config::GeneratorConfig;

/// Chance that a moved weight reverses its direction
pub const REVERSAL_PROBABILITY: f64 = 0.1;

/// Pick the dimensions to update this round.
///
/// With `count >= dimensions` every dimension is selected and no random
/// number is drawn. Otherwise indices are drawn uniformly, duplicates
/// rejected, until `count` distinct ones are collected. The result is in
/// ascending order.
pub fn select_indices<R: Rng + ?Sized>(dimensions: usize, count: usize, rng: &mut R) -> Vec<usize> {
    if count >= dimensions {
        return (0..dimensions).collect();
    }

    let mut selected = BTreeSet::new();
    while selected.len() < count {
        selected.insert(rng.gen_range(0..dimensions));
    }
    selected.into_iter().collect()
}

/// Applies one drift round to a hyperplane
#[derive(Debug, Clone)]
pub struct DriftUpdater {
    dimensions: usize,
    weights_per_round: usize,
    step: f64,
}

impl DriftUpdater {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            dimensions: config.dimensions,
            weights_per_round: config.weights_per_round,
            step: config.step_size(),
        }
    }

    /// Weight change per selected dimension and round
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Run one round and return the updated indices.
    pub fn advance<U, D>(
        &self,
        state: &mut HyperplaneState,
        index_rng: &mut U,
        direction_rng: &mut D,
    ) -> Vec<usize>
    where
        U: Rng + ?Sized,
        D: Rng + ?Sized,
    {
        let indices = select_indices(self.dimensions, self.weights_per_round, index_rng);

        for &i in &indices {
            state.shift_weight(i, self.step);
        }

        for &i in &indices {
            if direction_rng.gen::<f64>() <= REVERSAL_PROBABILITY {
                state.reverse_direction(i);
            }
        }

        state.refresh_threshold();
        trace!(
            updated = indices.len(),
            threshold = state.threshold(),
            "Hyperplane moved"
        );

        indices
    }
}
