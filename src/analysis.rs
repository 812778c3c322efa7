//! Batch analysis over a set of labelled bytecode listings
//!
//! Files are processed one after another and independently; the first
//! unreadable file aborts the batch. Group and global uniqueness are the
//! size of the union of per-file window sets, which equals counting over the
//! group's sequences joined by method boundaries.

use crate::error::Result;
use crate::extract::extract_file;
use crate::instruction::Instruction;
use crate::manifest::InputFile;
use crate::sequence::{count_windows, CountSummary, FrequencyTable, NgramSize, Window};
use std::collections::BTreeSet;

/// Statistics for one listing
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    pub input: InputFile,
    /// Length of the extracted sequence, boundaries included
    pub sequence_len: usize,
    pub frequency: FrequencyTable,
    pub summary: CountSummary,
}

impl FileAnalysis {
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.frequency.keys()
    }
}

/// Uniqueness totals for one benchmark group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub benchmark: String,
    /// Distinct windows across every file in the group
    pub distinct: usize,
    /// Sum of per-file window totals
    pub total: usize,
    /// Indices into [`AnalysisReport::files`], in input order
    pub files: Vec<usize>,
}

/// Results of a whole batch
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub ngram_size: NgramSize,
    pub files: Vec<FileAnalysis>,
    /// Groups in order of first appearance
    pub groups: Vec<GroupSummary>,
    /// Distinct windows across every file
    pub distinct: usize,
    /// Sum of every per-file window total
    pub total: usize,
}

/// Compute statistics for an already extracted sequence
pub fn analyse_sequence(
    size: NgramSize,
    input: InputFile,
    sequence: &[Instruction],
) -> Result<FileAnalysis> {
    let counts = count_windows(size.get(), sequence)?;

    Ok(FileAnalysis {
        input,
        sequence_len: sequence.len(),
        frequency: counts.frequencies(),
        summary: counts.summary(),
    })
}

/// Extract and analyse every input file in order
pub fn analyse(size: NgramSize, inputs: &[InputFile]) -> Result<AnalysisReport> {
    let mut files = Vec::with_capacity(inputs.len());

    for input in inputs {
        let sequence = extract_file(&input.path)?;
        let analysis = analyse_sequence(size, input.clone(), &sequence)?;

        tracing::info!(
            file = %input.name,
            benchmark = %input.benchmark,
            distinct = analysis.summary.distinct,
            total = analysis.summary.total,
            "analysed listing"
        );
        files.push(analysis);
    }

    let report = AnalysisReport::from_files(size, files);
    tracing::info!(
        files = report.files.len(),
        groups = report.groups.len(),
        distinct = report.distinct,
        total = report.total,
        "n-gram analysis complete"
    );

    Ok(report)
}

impl AnalysisReport {
    /// Assemble group and global totals from per-file results
    pub fn from_files(ngram_size: NgramSize, files: Vec<FileAnalysis>) -> Self {
        let mut groups: Vec<GroupSummary> = Vec::new();

        for (index, file) in files.iter().enumerate() {
            match groups
                .iter_mut()
                .find(|g| g.benchmark == file.input.benchmark)
            {
                Some(group) => group.files.push(index),
                None => groups.push(GroupSummary {
                    benchmark: file.input.benchmark.clone(),
                    distinct: 0,
                    total: 0,
                    files: vec![index],
                }),
            }
        }

        for group in &mut groups {
            let members = group.files.iter().map(|&i| &files[i]);
            group.distinct = union_size(members.clone());
            group.total = members.map(|f| f.summary.total).sum();
        }

        Self {
            ngram_size,
            distinct: union_size(files.iter()),
            total: files.iter().map(|f| f.summary.total).sum(),
            groups,
            files,
        }
    }

    /// Every window observed in at least one file, in window order
    pub fn all_windows(&self) -> BTreeSet<&Window> {
        self.files.iter().flat_map(|f| f.windows()).collect()
    }
}

fn union_size<'a>(files: impl Iterator<Item = &'a FileAnalysis>) -> usize {
    files.flat_map(|f| f.windows()).collect::<BTreeSet<_>>().len()
}

/// Percentage share of `part` in `whole`; 0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
