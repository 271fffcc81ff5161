//! Command-line interface components.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{ConverterConfig, CoordinatePolicy};
use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, LOG_TARGET_CRATE};
use crate::error::Result;

/// Convert point-observation CSV data to a CoverageJSON PointSeries document
#[derive(Parser, Debug, Clone)]
#[command(name = "coveragejson-convert")]
#[command(about = "Convert point-observation CSV data to CoverageJSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Input CSV file with time, longitude, latitude and temperature columns
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output CoverageJSON file (replaced if it exists)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// JSON configuration file describing parameters and validation rules
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject rows whose coordinates differ from the first row
    #[arg(long)]
    pub strict_coordinates: bool,

    /// Require time values to be ISO-8601 (RFC 3339) timestamps
    #[arg(long)]
    pub validate_times: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Build the run configuration: defaults, then config file, then flags
    pub fn load_configuration(&self) -> Result<ConverterConfig> {
        let mut config = match &self.config {
            Some(path) => ConverterConfig::from_file(path)?,
            None => ConverterConfig::default(),
        };

        config.input_path = self.input.clone();
        config.output_path = self.output.clone();
        if self.strict_coordinates {
            config.coordinate_policy = CoordinatePolicy::Strict;
        }
        if self.validate_times {
            config.validate_times = true;
        }

        config.validate()?;
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET_CRATE, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}
