use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use coveragejson_converter::cli::{Args, setup_logging};
use coveragejson_converter::models::ConversionSummary;
use coveragejson_converter::processor::ConversionPipeline;
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(summary) => {
            report_success(&summary);
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<ConversionSummary> {
    let config = args
        .load_configuration()
        .context("Failed to load configuration")?;

    let pipeline = ConversionPipeline::new(config)?;
    let summary = pipeline.run().context("Conversion failed")?;

    Ok(summary)
}

fn report_success(summary: &ConversionSummary) {
    println!(
        "{} {}",
        "CoverageJSON written to".bright_green().bold(),
        summary.output_path.display().to_string().bright_white()
    );
    println!(
        "  {} {} rows, {} time steps, parameters: {}",
        "Converted".bright_cyan(),
        summary.rows_read,
        summary.time_steps,
        summary.parameters.join(", ")
    );
    println!(
        "  {} {} bytes in {} ms",
        "Output:".bright_cyan(),
        summary.bytes_written,
        summary.processing_time_ms
    );
}
