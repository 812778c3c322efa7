//! JSON console summary
//!
//! `--format json` prints this document to stdout after the report files are
//! written.

use crate::analysis::{AnalysisReport, FileAnalysis};
use crate::sequence::{top_windows, window_to_string};
use serde::{Deserialize, Serialize};

/// One frequent n-gram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonNgram {
    /// Mnemonics separated by single spaces
    pub ngram: String,
    /// Relative frequency within the file (0.0 to 1.0)
    pub frequency: f64,
}

/// Per-file statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonFile {
    pub name: String,
    pub path: String,
    pub benchmark: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub implementation: String,
    /// Extracted instructions, boundaries included
    pub sequence_len: usize,
    pub distinct: usize,
    pub total: usize,
    /// distinct / total (0 when total is 0)
    pub coverage: f64,
    /// Most frequent n-grams, highest first
    pub top: Vec<JsonNgram>,
}

/// Per-benchmark totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonGroup {
    pub benchmark: String,
    pub distinct: usize,
    pub total: usize,
    /// Member file names in input order
    pub files: Vec<String>,
}

/// Complete summary document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonSummary {
    pub ngram_size: usize,
    pub files: Vec<JsonFile>,
    pub groups: Vec<JsonGroup>,
    pub distinct: usize,
    pub total: usize,
}

impl JsonFile {
    fn from_analysis(file: &FileAnalysis, top_k: usize) -> Self {
        Self {
            name: file.input.name.clone(),
            path: file.input.path.display().to_string(),
            benchmark: file.input.benchmark.clone(),
            implementation: file.input.implementation.clone(),
            sequence_len: file.sequence_len,
            distinct: file.summary.distinct,
            total: file.summary.total,
            coverage: file.summary.coverage(),
            top: top_windows(&file.frequency, top_k)
                .into_iter()
                .map(|(window, frequency)| JsonNgram {
                    ngram: window_to_string(&window),
                    frequency,
                })
                .collect(),
        }
    }
}

impl JsonSummary {
    /// Build the summary, keeping the `top_k` most frequent n-grams per file
    pub fn from_report(report: &AnalysisReport, top_k: usize) -> Self {
        Self {
            ngram_size: report.ngram_size.get(),
            files: report
                .files
                .iter()
                .map(|f| JsonFile::from_analysis(f, top_k))
                .collect(),
            groups: report
                .groups
                .iter()
                .map(|g| JsonGroup {
                    benchmark: g.benchmark.clone(),
                    distinct: g.distinct,
                    total: g.total,
                    files: g
                        .files
                        .iter()
                        .map(|&i| report.files[i].input.name.clone())
                        .collect(),
                })
                .collect(),
            distinct: report.distinct,
            total: report.total,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
