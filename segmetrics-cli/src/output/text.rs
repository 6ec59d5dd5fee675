//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmetrics_api::MetricRecord;
use std::io::Write;

/// Plain text formatter - outputs one tab-separated line per pair
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &MetricRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\tsimilarity={:.4}\tiou={:.2}\tdice={:.2}\tprecision={:.4}",
            record.mask_name,
            record.segment_name,
            record.similarity,
            record.iou,
            record.dice,
            record.precision
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
