//! CoverageJSON Converter Library
//!
//! Converts tabular point-observation data (timestamped measurements at a
//! single fixed location) from CSV into CoverageJSON `PointSeries` documents.
//!
//! The conversion is a linear pipeline:
//! - [`TabularReader`] parses the CSV file into rows keyed by column name
//! - [`FieldExtractor`] validates and types the `time`, `longitude`,
//!   `latitude` and parameter columns
//! - [`DocumentBuilder`] assembles the CoverageJSON document
//! - [`DocumentWriter`] writes it as indented JSON, replacing the output
//!   file atomically
//!
//! [`ConversionPipeline`] runs the stages in order.
//!
//! ```no_run
//! use coveragejson_converter::{ConversionPipeline, ConverterConfig};
//!
//! # fn example() -> coveragejson_converter::Result<()> {
//! let config = ConverterConfig::default()
//!     .with_input_path("observations.csv")
//!     .with_output_path("coverage.json");
//! let summary = ConversionPipeline::new(config)?.run()?;
//! println!("Wrote {} time steps", summary.time_steps);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coverage;
pub mod error;
pub mod models;
pub mod processor;

// Pipeline stages
pub mod app {
    pub mod services {
        pub mod document_builder;
        pub mod document_writer;
        pub mod field_extractor;
        pub mod tabular_reader;
    }
}

// Re-export commonly used types
pub use app::services::document_builder::DocumentBuilder;
pub use app::services::document_writer::DocumentWriter;
pub use app::services::field_extractor::FieldExtractor;
pub use app::services::tabular_reader::TabularReader;
pub use config::{ConverterConfig, CoordinatePolicy, ParameterConfig};
pub use coverage::CoverageDocument;
pub use error::{ConvertError, Result};
pub use models::{ConversionSummary, ExtractedSeries, Row};
pub use processor::ConversionPipeline;
