//! Record Sinks
//!
//! Writers that consume generated examples. The generator itself does not
//! know about any of them.

use serde_json::json;
use std::io::Write;

use super::{Example, Schema};
use crate::error::Result;

/// Header of the row identifier column in tabular output
pub const ROW_ID_COLUMN: &str = "Row ID";

/// Consumer of generated records
pub trait RecordSink {
    /// Called once before any example
    fn write_header(&mut self, schema: &Schema) -> Result<()>;

    /// Write a single example
    fn write_example(&mut self, example: &Example) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}

/// CSV sink: `Row ID`, `Label`, `Column 1` .. `Column n`
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| err.into_error().into())
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_header(&mut self, schema: &Schema) -> Result<()> {
        let mut header = vec![ROW_ID_COLUMN.to_string()];
        header.extend(schema.columns().iter().cloned());
        self.writer.write_record(&header)?;
        Ok(())
    }

    fn write_example(&mut self, example: &Example) -> Result<()> {
        let mut record = vec![example.row.to_string()];
        record.extend(example.record_fields());
        self.writer.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// JSON lines sink: one object per example
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn write_header(&mut self, _schema: &Schema) -> Result<()> {
        // Every line is self-describing
        Ok(())
    }

    fn write_example(&mut self, example: &Example) -> Result<()> {
        let line = json!({
            "row": example.row.to_string(),
            "label": example.label,
            "features": example.features,
        });
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
