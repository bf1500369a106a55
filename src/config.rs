//! Generator configuration.
//!
//! [`GeneratorConfig`] is the validated input of the generator core.
//! [`GeneratorSettings`] is the user-facing form: it is what gets read from
//! TOML files or the command line, carries the noise as an integer
//! percentage and models the optional seed as a plain value plus a flag.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{ConfigError, Result};

/// Default number of examples (also the drift normalizer)
pub const DEFAULT_EXAMPLE_COUNT: i64 = 5000;
/// Default dimensionality
pub const DEFAULT_DIMENSIONS: i64 = 5;
/// Default noise in percent
pub const DEFAULT_NOISE_PERCENT: i64 = 5;
/// Default number of weights moved per round
pub const DEFAULT_WEIGHT_UPDATE_COUNT: i64 = 5;
/// Default drift magnitude
pub const DEFAULT_MAGNITUDE: f64 = 0.01;
/// Smallest dimensionality accepted from user settings
pub const MIN_USER_DIMENSIONS: i64 = 3;

/// Validated configuration of a moving hyperplane generator.
///
/// Fixed for the lifetime of a generator. Construction of the generator
/// re-checks it with [`GeneratorConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed all five random streams are derived from
    pub seed: i64,
    /// Number of examples; only used to normalize the drift speed
    pub example_count: u64,
    /// Dimensionality of the examples
    pub dimensions: usize,
    /// Probability of flipping a label, in [0, 1]
    pub noise_fraction: f64,
    /// Number of weights moved per round (clamped to `dimensions`)
    pub weights_per_round: usize,
    /// Total drift magnitude over `example_count` rounds
    pub drift_magnitude: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            example_count: DEFAULT_EXAMPLE_COUNT as u64,
            dimensions: DEFAULT_DIMENSIONS as usize,
            noise_fraction: DEFAULT_NOISE_PERCENT as f64 / 100.0,
            weights_per_round: DEFAULT_WEIGHT_UPDATE_COUNT as usize,
            drift_magnitude: DEFAULT_MAGNITUDE,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with the default parameters and the given seed
    pub fn with_seed(seed: i64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check the invariants the generator relies on.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.dimensions < 1 {
            return Err(ConfigError::InvalidDimensions(self.dimensions as i64));
        }
        if self.example_count == 0 {
            return Err(ConfigError::ZeroExampleCount(0));
        }
        if !(0.0..=1.0).contains(&self.noise_fraction) {
            return Err(ConfigError::NoiseOutOfRange(self.noise_fraction));
        }
        if !self.drift_magnitude.is_finite() || self.drift_magnitude < 0.0 {
            return Err(ConfigError::InvalidMagnitude(self.drift_magnitude));
        }
        Ok(())
    }

    /// Number of weights actually moved per round
    pub fn effective_updates(&self) -> usize {
        self.weights_per_round.min(self.dimensions)
    }

    /// Weight change applied to a selected dimension in one round
    pub fn step_size(&self) -> f64 {
        self.drift_magnitude / self.example_count as f64
    }
}

/// User-facing generator settings.
///
/// Integer fields are signed so that out-of-range input survives parsing
/// and is reported as a [`ConfigError`] by [`GeneratorSettings::into_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Number of examples to create
    pub example_count: i64,
    /// Dimensionality of the examples
    pub dimensions: i64,
    /// Label noise in percent (0-100)
    pub noise_percent: i64,
    /// Number of weights updated after each example
    pub weight_update_count: i64,
    /// Magnitude of change of the hyperplane weights
    pub magnitude: f64,
    /// Seed used when `use_random_seed` is off
    pub seed: i64,
    /// Draw a fresh seed for every run
    pub use_random_seed: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            example_count: DEFAULT_EXAMPLE_COUNT,
            dimensions: DEFAULT_DIMENSIONS,
            noise_percent: DEFAULT_NOISE_PERCENT,
            weight_update_count: DEFAULT_WEIGHT_UPDATE_COUNT,
            magnitude: DEFAULT_MAGNITUDE,
            seed: 0,
            use_random_seed: true,
        }
    }
}

impl GeneratorSettings {
    /// Settings with a fixed seed and default parameters
    pub fn seeded(seed: i64) -> Self {
        Self {
            seed,
            use_random_seed: false,
            ..Self::default()
        }
    }

    /// Parse settings from a TOML string; missing keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save settings to a TOML file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Seed for this run, drawing a fresh one when requested
    pub fn resolve_seed(&self) -> i64 {
        if self.use_random_seed {
            let seed = rand::random::<i64>();
            info!(seed, "Using random seed");
            seed
        } else {
            self.seed
        }
    }

    /// Validate the settings and turn them into a generator configuration.
    pub fn into_config(self) -> std::result::Result<GeneratorConfig, ConfigError> {
        if self.dimensions < 1 {
            return Err(ConfigError::InvalidDimensions(self.dimensions));
        }
        if self.dimensions < MIN_USER_DIMENSIONS {
            return Err(ConfigError::DimensionsBelowMinimum {
                min: MIN_USER_DIMENSIONS,
                got: self.dimensions,
            });
        }
        if self.example_count < 1 {
            return Err(ConfigError::ZeroExampleCount(self.example_count));
        }
        if !(0..=100).contains(&self.noise_percent) {
            return Err(ConfigError::NoisePercentOutOfRange(self.noise_percent));
        }
        if self.weight_update_count < 0 {
            return Err(ConfigError::NegativeUpdateCount(self.weight_update_count));
        }

        let config = GeneratorConfig {
            seed: self.resolve_seed(),
            example_count: self.example_count as u64,
            dimensions: self.dimensions as usize,
            noise_fraction: self.noise_percent as f64 / 100.0,
            weights_per_round: self.weight_update_count as usize,
            drift_magnitude: self.magnitude,
        };
        config.validate()?;
        Ok(config)
    }
}
