//! Error types for the moving hyperplane generator

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Generator configuration was rejected at construction time
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV sink error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be parsed
    #[error("Failed to parse settings: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Reasons a generator configuration is rejected.
///
/// These are only ever produced while constructing a generator; a built
/// generator never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than one dimension requested
    #[error("dimensions must be at least 1, got {0}")]
    InvalidDimensions(i64),

    /// User-facing dimensionality below the supported minimum
    #[error("dimensions must be at least {min}, got {got}")]
    DimensionsBelowMinimum { min: i64, got: i64 },

    /// Example count of zero (or below) would divide the drift by zero
    #[error("example count must be positive, got {0}")]
    ZeroExampleCount(i64),

    /// Noise fraction outside [0, 1]
    #[error("noise fraction must lie in [0, 1], got {0}")]
    NoiseOutOfRange(f64),

    /// Noise percentage outside 0..=100
    #[error("noise percentage must lie in 0..=100, got {0}")]
    NoisePercentOutOfRange(i64),

    /// Negative number of weights to update per round
    #[error("weight update count must not be negative, got {0}")]
    NegativeUpdateCount(i64),

    /// Drift magnitude negative or not finite
    #[error("drift magnitude must be a finite non-negative number, got {0}")]
    InvalidMagnitude(f64),
}
