//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmetrics_api::MetricRecord;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
///
/// The keys match the metric store, so the output can be fed back as a
/// store file.
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<MetricRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty-printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &MetricRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
