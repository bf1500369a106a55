//! Stream Generator Module
//!
//! Synthetic data streams with concept drift. The moving hyperplane
//! generator draws uniform points and labels them against a linear
//! decision boundary that shifts a little after every example.

mod drift;
mod hyperplane;
mod moving_hyperplane;
mod streams;

pub use drift::{select_indices, DriftUpdater, REVERSAL_PROBABILITY};
pub use hyperplane::{compute_threshold, init_directions, init_weights, Direction, HyperplaneState};
pub use moving_hyperplane::{ExampleIter, MovingHyperplane};
pub use streams::RandomStreams;

use crate::error::Result;
use crate::record::{Example, RecordSink, RowId, Schema};

/// Trait for pull-based example generators
pub trait StreamGenerator {
    /// Column layout of the produced records
    fn schema(&self) -> Schema;

    /// Produce the next example under the given row identifier
    fn next_example(&mut self, row: RowId) -> Example;

    /// Number of examples produced so far
    fn rows_emitted(&self) -> u64;

    /// Produce the next example, numbering rows from zero
    fn next(&mut self) -> Example {
        let row = RowId(self.rows_emitted());
        self.next_example(row)
    }

    /// Write `count` examples into a sink, header first
    fn write_to<S: RecordSink + ?Sized>(&mut self, sink: &mut S, count: u64) -> Result<()>
    where
        Self: Sized,
    {
        let schema = self.schema();
        sink.write_header(&schema)?;
        for _ in 0..count {
            let example = self.next();
            debug_assert!(schema.matches(&example), "example does not fit the schema");
            sink.write_example(&example)?;
        }
        sink.finish()
    }
}
