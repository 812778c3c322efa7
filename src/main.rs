use anyhow::{Context, Result};
use clap::Parser;
use dexgram::analysis::{self, AnalysisReport};
use dexgram::cli::{Cli, OutputFormat};
use dexgram::count_output::{CountReport, COUNT_FILE_NAME};
use dexgram::csv_output::{FrequencyMatrix, FREQUENCY_FILE_NAME};
use dexgram::json_output::JsonSummary;
use dexgram::sequence::{top_windows, window_to_string, NgramSize};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; `--debug` forces TRACE, otherwise RUST_LOG decides
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Write the frequency matrix and count report into `output_dir`
fn write_reports(report: &AnalysisReport, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let frequency_path = output_dir.join(FREQUENCY_FILE_NAME);
    fs::write(&frequency_path, FrequencyMatrix::new(report).to_csv())
        .with_context(|| format!("Failed to write {}", frequency_path.display()))?;
    tracing::info!(path = %frequency_path.display(), "wrote frequency matrix");

    let count_path = output_dir.join(COUNT_FILE_NAME);
    fs::write(&count_path, CountReport::new(report).to_text())
        .with_context(|| format!("Failed to write {}", count_path.display()))?;
    tracing::info!(path = %count_path.display(), "wrote count report");

    Ok(())
}

/// Print per-file counts and most frequent n-grams
fn print_text_summary(report: &AnalysisReport, top: usize) {
    println!(
        "{}-gram analysis: {} files, {} distinct / {} total",
        report.ngram_size,
        report.files.len(),
        report.distinct,
        report.total
    );

    let width = report
        .files
        .iter()
        .map(|f| f.input.name.len())
        .max()
        .unwrap_or(0)
        .max("file".len());

    println!(
        "{:<width$}  {:<16} {:>9} {:>9} {:>9}",
        "file", "benchmark", "distinct", "total", "coverage"
    );
    println!("{}", "─".repeat(width + 47));

    for file in &report.files {
        println!(
            "{:<width$}  {:<16} {:>9} {:>9} {:>9.3}",
            file.input.name,
            file.input.benchmark,
            file.summary.distinct,
            file.summary.total,
            file.summary.coverage()
        );

        for (window, freq) in top_windows(&file.frequency, top) {
            println!("    {:>7.4}  {}", freq, window_to_string(&window));
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Reject a bad window size before touching any file
    let size = NgramSize::new(args.ngram_size)?;
    let inputs = args.inputs()?;

    tracing::debug!(ngram_size = %size, files = inputs.len(), "starting analysis");

    let report = analysis::analyse(size, &inputs)?;
    write_reports(&report, &args.output_dir)?;

    match args.format {
        OutputFormat::Text => print_text_summary(&report, args.top),
        OutputFormat::Json => {
            let summary = JsonSummary::from_report(&report, args.top);
            println!("{}", summary.to_json()?);
        }
    }

    Ok(())
}
