//! Moving Hyperplane Generator
//!
//! Streaming data generator from "Mining Concept-Drifting Data Streams
//! using Ensemble Classifiers" (Wang, Fan, Yu and Han, 2003), section 6.2.
//!
//! Each example is a uniform point in `[0, 1)^d`, labeled positive when
//! `sum_i w_i * x_i >= sum_i w_i / 2`. After every example some weights move
//! by `magnitude / example_count` along their directions, and each moved
//! direction reverses with a probability of 10%.

use rand::Rng;
use tracing::{debug, info};

use super::drift::DriftUpdater;
use super::hyperplane::HyperplaneState;
use super::streams::RandomStreams;
use super::StreamGenerator;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::record::{Example, Label, RowId, Schema};

/// Moving hyperplane stream generator
///
/// Deterministic for a given [`GeneratorConfig`]: two generators built from
/// the same configuration produce identical sequences. One instance must not
/// be shared between threads that pull examples concurrently; create one
/// generator per worker instead.
#[derive(Debug, Clone)]
pub struct MovingHyperplane {
    config: GeneratorConfig,
    streams: RandomStreams,
    state: HyperplaneState,
    updater: DriftUpdater,
    rows_emitted: u64,
}

impl MovingHyperplane {
    /// Create a new generator
    ///
    /// Fails with a configuration error if `config` is invalid; no generator
    /// is produced in that case.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let mut streams = RandomStreams::derive(config.seed);
        let state = HyperplaneState::initialize(
            config.dimensions,
            &mut streams.direction,
            &mut streams.weight,
        );
        let updater = DriftUpdater::new(&config);

        debug!(
            seed = config.seed,
            dimensions = config.dimensions,
            updates_per_round = config.effective_updates(),
            step = updater.step(),
            threshold = state.threshold(),
            "Moving hyperplane initialized"
        );

        Ok(Self {
            config,
            streams,
            state,
            updater,
            rows_emitted: 0,
        })
    }

    /// Configuration this generator was built from
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Current hyperplane (the one the next example is labeled against)
    pub fn hyperplane(&self) -> &HyperplaneState {
        &self.state
    }

    /// Unbounded stream of examples with incrementing row ids
    pub fn iter(&mut self) -> ExampleIter<'_> {
        ExampleIter { generator: self }
    }

    /// Produce `example_count` examples, numbered from zero
    pub fn generate_table(&mut self) -> Vec<Example> {
        let count = self.config.example_count;
        let table: Vec<Example> = (0..count).map(|i| self.next_example(RowId(i))).collect();

        let positives = table.iter().filter(|e| e.label == Label::Positive).count();
        info!(
            rows = table.len(),
            positives,
            negatives = table.len() - positives,
            "Generated moving hyperplane table"
        );

        table
    }

    fn draw_point(&mut self) -> Vec<f64> {
        (0..self.config.dimensions)
            .map(|_| self.streams.example.gen::<f64>())
            .collect()
    }

    fn apply_noise(&mut self, label: Label) -> Label {
        // The draw is always taken so the noise stream advances once per example
        let draw = self.streams.noise.gen::<f64>();
        if self.config.noise_fraction > 0.0 && draw <= self.config.noise_fraction {
            label.flipped()
        } else {
            label
        }
    }
}

impl StreamGenerator for MovingHyperplane {
    fn schema(&self) -> Schema {
        Schema::for_dimensions(self.config.dimensions)
    }

    fn next_example(&mut self, row: RowId) -> Example {
        // Label against the current hyperplane
        let point = self.draw_point();
        let label = Label::from_side(self.state.classify(&point));
        let label = self.apply_noise(label);
        let example = Example {
            row,
            label,
            features: point,
        };

        // Then move it for the following call
        self.updater.advance(
            &mut self.state,
            &mut self.streams.update_index,
            &mut self.streams.direction,
        );
        self.rows_emitted += 1;

        example
    }

    fn rows_emitted(&self) -> u64 {
        self.rows_emitted
    }
}

/// Iterator over generated examples
pub struct ExampleIter<'a> {
    generator: &'a mut MovingHyperplane,
}

impl<'a> Iterator for ExampleIter<'a> {
    type Item = Example;

    fn next(&mut self) -> Option<Self::Item> {
        Some(StreamGenerator::next(&mut *self.generator))
    }
}
