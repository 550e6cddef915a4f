//! Document writers.

use crate::args::OutputFormat;
use crate::error::CliError;
use fixture_core::Composite;
use std::io::Write;
use std::time::Duration;

/// Metrics from a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of documents written.
    pub documents_written: u64,
    /// Fields across all documents, nested ones included.
    pub fields_generated: u64,
    /// Deepest nesting seen in any document.
    pub max_depth: usize,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating documents.
    pub generation_duration: Duration,
    /// Time spent writing documents.
    pub write_duration: Duration,
}

impl GenerateMetrics {
    /// Calculate documents per second.
    pub fn documents_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Record one generated document.
    pub fn record(&mut self, doc: &Composite) {
        self.documents_written += 1;
        self.fields_generated += doc.total_fields() as u64;
        self.max_depth = self.max_depth.max(doc.depth());
    }
}

/// Writes documents in the selected format.
pub struct DocumentWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    written: u64,
}

impl<W: Write> DocumentWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            written: 0,
        }
    }

    pub fn write(&mut self, doc: &Composite) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, doc)?;
                writeln!(self.writer)?;
            }
            OutputFormat::JsonPretty => {
                serde_json::to_writer_pretty(&mut self.writer, doc)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Yaml => {
                // serde_yaml does not emit a separator for a single document
                if self.written > 0 {
                    writeln!(self.writer, "---")?;
                }
                serde_yaml::to_writer(&mut self.writer, doc)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W, CliError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
