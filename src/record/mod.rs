//! Record Module
//!
//! Shape of the records a generator emits: a label column followed by one
//! numeric column per dimension, keyed by a stable row identifier.

mod sink;

pub use sink::{CsvSink, JsonLinesSink, RecordSink};

use serde::Serialize;
use std::fmt;

/// Name of the label column
pub const LABEL_COLUMN: &str = "Label";

/// Class label of an example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    /// Point lies on or above the hyperplane
    Positive,
    /// Point lies below the hyperplane
    Negative,
}

impl Label {
    /// Label for the outcome of a hyperplane test
    pub fn from_side(above: bool) -> Self {
        if above {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// The opposite label
    pub fn flipped(self) -> Self {
        match self {
            Label::Positive => Label::Negative,
            Label::Negative => Label::Positive,
        }
    }

    /// Text used in record output
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row identifier, used only for record identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}", self.0)
    }
}

/// A single labeled example
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    /// Row identifier
    pub row: RowId,
    /// (Possibly noisy) class label
    pub label: Label,
    /// Coordinates of the point, one per dimension
    pub features: Vec<f64>,
}

impl Example {
    /// Number of feature fields
    pub fn dimensions(&self) -> usize {
        self.features.len()
    }

    /// Field values in schema order: label first, then the features
    pub fn record_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.features.len() + 1);
        fields.push(self.label.to_string());
        fields.extend(self.features.iter().map(|x| x.to_string()));
        fields
    }
}

/// Ordered column layout shared by every record of one generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// `Label`, then `Column 1` .. `Column n`
    pub fn for_dimensions(dimensions: usize) -> Self {
        let mut columns = Vec::with_capacity(dimensions + 1);
        columns.push(LABEL_COLUMN.to_string());
        columns.extend((1..=dimensions).map(|i| format!("Column {}", i)));
        Self { columns }
    }

    /// All column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of feature columns
    pub fn dimensions(&self) -> usize {
        self.columns.len() - 1
    }

    /// Check that an example fits this schema
    pub fn matches(&self, example: &Example) -> bool {
        example.dimensions() == self.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_flip() {
        assert_eq!(Label::Positive.flipped(), Label::Negative);
        assert_eq!(Label::Negative.flipped().flipped(), Label::Negative);
        assert_eq!(Label::from_side(true), Label::Positive);
    }

    #[test]
    fn test_row_id_display() {
        assert_eq!(RowId(12).to_string(), "Row 12");
    }

    #[test]
    fn test_schema_columns() {
        let schema = Schema::for_dimensions(3);
        assert_eq!(
            schema.columns(),
            &["Label", "Column 1", "Column 2", "Column 3"]
        );
        assert_eq!(schema.dimensions(), 3);
    }

    #[test]
    fn test_record_fields_order() {
        let example = Example {
            row: RowId(0),
            label: Label::Negative,
            features: vec![0.25, 0.5],
        };
        assert_eq!(example.record_fields(), vec!["Negative", "0.25", "0.5"]);
        assert!(Schema::for_dimensions(2).matches(&example));
        assert!(!Schema::for_dimensions(3).matches(&example));
    }
}
