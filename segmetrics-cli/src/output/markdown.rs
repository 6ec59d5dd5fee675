//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmetrics_api::MetricRecord;
use std::io::Write;

/// Markdown formatter - outputs records as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "| # | mask | segmentada | similarity | iou | dice | precision |"
        )?;
        writeln!(self.writer, "|---|---|---|---:|---:|---:|---:|")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &MetricRecord) -> Result<()> {
        if self.record_count == 0 {
            self.write_header()?;
        }
        self.record_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {:.4} | {:.2} | {:.2} | {:.4} |",
            self.record_count,
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
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total pairs: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
