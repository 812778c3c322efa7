//! Input file labelling
//!
//! Every listing belongs to a benchmark group (e.g. `fasta`) and an
//! implementation variant (e.g. `java`, `kotlin-idiomatic`). Labels are
//! supplied explicitly, either with `--label` on the command line or in a
//! TOML manifest. Positional paths are taken verbatim and go to the
//! `ungrouped` group.
//!
//! # Label form
//!
//! `--label BENCHMARK[/IMPLEMENTATION]=PATH`, e.g.
//! `--label fasta/java=out/java/Fasta.smali`.
//!
//! Display names `all` and `<anything> (all)` are reserved for the totals
//! rows of the count report.
//!
//! # Example dexgram.toml
//!
//! ```toml
//! [[file]]
//! path = "java/Fasta.smali"
//! benchmark = "fasta"
//! implementation = "java"
//!
//! [[file]]
//! path = "kotlin/Fasta.smali"
//! benchmark = "fasta"
//! implementation = "kotlin-idiomatic"
//! name = "Fasta.kt"
//! ```

use crate::error::{AnalysisError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Benchmark label for files given without one
pub const UNGROUPED: &str = "ungrouped";

/// Label of report totals rows; not usable as a display name
pub const ALL_LABEL: &str = "all";

/// A bytecode listing together with its report labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    /// Column header in the frequency matrix, row label in the count report
    pub name: String,
    pub benchmark: String,
    pub implementation: String,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
            benchmark: UNGROUPED.to_string(),
            implementation: String::new(),
        }
    }

    pub fn with_benchmark(mut self, benchmark: impl Into<String>) -> Self {
        self.benchmark = benchmark.into();
        self
    }

    pub fn with_implementation(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = implementation.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// A plain path argument; `=` is an ordinary path character here
    pub fn from_path_arg(arg: &str) -> Result<Self> {
        Self::new(Self::checked_path(arg)?).validated()
    }

    /// Parse a `--label` argument of the form `BENCHMARK[/IMPLEMENTATION]=PATH`
    ///
    /// Only the first `=` separates the label, so the path may contain `=`.
    ///
    /// # Example
    /// ```
    /// use dexgram::manifest::InputFile;
    ///
    /// let input = InputFile::from_label_arg("nbody/java=out/NBody.smali").unwrap();
    /// assert_eq!(input.benchmark, "nbody");
    /// assert_eq!(input.implementation, "java");
    /// assert_eq!(input.name, "out/NBody.smali");
    /// ```
    pub fn from_label_arg(arg: &str) -> Result<Self> {
        let Some((label, path)) = arg.split_once('=') else {
            return Err(AnalysisError::InvalidArgument(format!(
                "label '{}' must have the form BENCHMARK[/IMPLEMENTATION]=PATH",
                arg
            )));
        };

        let input = Self::new(Self::checked_path(path)?);
        let (benchmark, implementation) = match label.split_once('/') {
            Some((benchmark, implementation)) => (benchmark.trim(), implementation.trim()),
            None => (label.trim(), ""),
        };

        if benchmark.is_empty() {
            return Err(AnalysisError::InvalidArgument(format!(
                "empty benchmark label in '{}'",
                arg
            )));
        }

        input
            .with_benchmark(benchmark)
            .with_implementation(implementation)
            .validated()
    }

    /// Reject display names that would read as a totals row in the count report
    pub fn validated(self) -> Result<Self> {
        if self.name == ALL_LABEL || self.name.ends_with(&format!(" ({})", ALL_LABEL)) {
            return Err(AnalysisError::InvalidArgument(format!(
                "display name '{}' is reserved for report totals",
                self.name
            )));
        }
        Ok(self)
    }

    fn checked_path(path: &str) -> Result<&str> {
        if path.trim().is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "empty input file path".to_string(),
            ));
        }
        Ok(path)
    }
}

/// Root of a dexgram.toml manifest
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub file: Vec<ManifestEntry>,
}

/// One `[[file]]` table
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub benchmark: Option<String>,
    #[serde(default)]
    pub implementation: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Manifest {
    /// Load a manifest from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;

        Self::from_toml_str(&content)
    }

    /// Load a manifest from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AnalysisError::InvalidArgument(format!("invalid manifest: {}", e)))
    }

    /// Convert entries to input files, resolving relative paths against `base_dir`
    pub fn into_inputs(self, base_dir: &Path) -> Result<Vec<InputFile>> {
        self.file
            .into_iter()
            .map(|entry| {
                let name = entry
                    .name
                    .unwrap_or_else(|| entry.path.display().to_string());
                let path = if entry.path.is_absolute() {
                    entry.path
                } else {
                    base_dir.join(entry.path)
                };

                InputFile::new(path)
                    .with_name(name)
                    .with_benchmark(entry.benchmark.unwrap_or_else(|| UNGROUPED.to_string()))
                    .with_implementation(entry.implementation.unwrap_or_default())
                    .validated()
            })
            .collect()
    }
}

/// Load the inputs of a manifest file, relative paths resolved against its directory
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<InputFile>> {
    let path = path.as_ref();
    let manifest = Manifest::from_file(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let inputs = manifest.into_inputs(base_dir)?;
    tracing::debug!(
        manifest = %path.display(),
        files = inputs.len(),
        "loaded input manifest"
    );

    Ok(inputs)
}
