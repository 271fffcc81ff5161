//! Conversion pipeline orchestration.
//!
//! Runs the four stages in strict order: read rows, extract typed fields,
//! build the CoverageJSON document, write it out. The first failing stage
//! aborts the run and the writer is only reached after a successful build,
//! so a failed conversion never produces an output file.

use std::time::Instant;
use tracing::{debug, info};

use crate::app::services::document_builder::DocumentBuilder;
use crate::app::services::document_writer::DocumentWriter;
use crate::app::services::field_extractor::FieldExtractor;
use crate::app::services::tabular_reader::TabularReader;
use crate::config::ConverterConfig;
use crate::constants::axes;
use crate::coverage::CoverageDocument;
use crate::error::Result;
use crate::models::ConversionSummary;

#[cfg(test)]
mod tests;

/// Converts one CSV file into one CoverageJSON file
#[derive(Debug, Clone)]
pub struct ConversionPipeline {
    config: ConverterConfig,
}

impl ConversionPipeline {
    /// Create a pipeline; the configuration is validated up front
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run read, extract and build without writing anything
    pub fn build_document(&self) -> Result<(CoverageDocument, usize)> {
        let reader = TabularReader::new(&self.config.input_path);
        let rows = reader.read_rows()?;
        let rows_read = rows.len();
        debug!("Stage 1 complete: {} rows read", rows_read);

        let series = FieldExtractor::from_config(&self.config).extract(&rows)?;
        drop(rows);
        debug!("Stage 2 complete: {} time steps extracted", series.time_steps());

        let document = DocumentBuilder::new(self.config.parameters.clone()).build(series)?;
        debug!("Stage 3 complete: document built");

        Ok((document, rows_read))
    }

    /// Run the full conversion
    pub fn run(&self) -> Result<ConversionSummary> {
        let start_time = Instant::now();
        info!(
            "Converting {} -> {}",
            self.config.input_path.display(),
            self.config.output_path.display()
        );

        let (document, rows_read) = self.build_document()?;
        let time_steps = document
            .domain
            .axes
            .get(axes::T)
            .map_or(0, |axis| axis.values.len());
        let parameters = document.parameters.keys().cloned().collect();

        let writer = DocumentWriter::new(&self.config.output_path);
        let bytes_written = writer.write(&document)?;
        debug!("Stage 4 complete: {} bytes written", bytes_written);

        Ok(ConversionSummary {
            rows_read,
            time_steps,
            parameters,
            output_path: self.config.output_path.clone(),
            bytes_written,
            processing_time_ms: start_time.elapsed().as_millis(),
        })
    }
}
