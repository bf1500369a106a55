//! Moving Hyperplane Stream Generator
//!
//! Deterministic synthetic data streams with concept drift, for benchmarking
//! streaming classifiers. Examples are uniform points labeled against a
//! hyperplane whose weights slowly drift between consecutive examples.
//!
//! # Modules
//!
//! - `config` - Generator configuration and TOML-backed user settings
//! - `generator` - Seed splitting, hyperplane state, drift and the generator
//! - `record` - Labels, record layout and output sinks
//! - `error` - Error types
//!
//! # Example
//!
//! ```rust
//! use moving_hyperplane::{GeneratorConfig, MovingHyperplane, StreamGenerator};
//!
//! let config = GeneratorConfig {
//!     dimensions: 4,
//!     ..GeneratorConfig::with_seed(42)
//! };
//! let mut generator = MovingHyperplane::new(config).unwrap();
//!
//! for example in generator.iter().take(3) {
//!     println!("{} {} {:?}", example.row, example.label, example.features);
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod record;

// Re-export commonly used types
pub use config::{GeneratorConfig, GeneratorSettings};
pub use error::{ConfigError, Error, Result};
pub use generator::{Direction, HyperplaneState, MovingHyperplane, RandomStreams, StreamGenerator};
pub use record::{CsvSink, Example, JsonLinesSink, Label, RecordSink, RowId, Schema};
