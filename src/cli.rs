//! CLI argument parsing for dexgram

use crate::error::{AnalysisError, Result};
use crate::manifest::{load_manifest, InputFile};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Format of the console summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON document for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dexgram")]
#[command(version)]
#[command(about = "N-gram frequency analysis of Dalvik bytecode listings", long_about = None)]
pub struct Cli {
    /// N-gram window size (1-4)
    #[arg(value_name = "NGRAM_SIZE")]
    pub ngram_size: usize,

    /// Bytecode listings, reported in the `ungrouped` group
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Labelled bytecode listing (repeatable)
    #[arg(short = 'l', long = "label", value_name = "BENCHMARK[/IMPLEMENTATION]=PATH")]
    pub labels: Vec<String>,

    /// TOML manifest listing input files with their labels
    #[arg(short = 'm', long = "manifest", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Directory that receives the frequency matrix and count report
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Console summary format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of most frequent n-grams shown per file
    #[arg(long = "top", value_name = "K", default_value = "5")]
    pub top: usize,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Resolve manifest entries, then `--label` files, then plain files
    pub fn inputs(&self) -> Result<Vec<InputFile>> {
        let mut inputs = match &self.manifest {
            Some(path) => load_manifest(path)?,
            None => Vec::new(),
        };

        for arg in &self.labels {
            inputs.push(InputFile::from_label_arg(arg)?);
        }
        for arg in &self.files {
            inputs.push(InputFile::from_path_arg(arg)?);
        }

        if inputs.is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "no input files (pass FILES, --label or --manifest)".to_string(),
            ));
        }

        Ok(inputs)
    }
}
