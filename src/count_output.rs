//! Grouped n-gram count summary
//!
//! For every benchmark group: one row per file with its distinct window count,
//! that count as a share of the group's and of all files' distinct windows,
//! and its total window count. Each group closes with its own totals row and
//! the report closes with a global row.

use crate::analysis::{percent, AnalysisReport};
pub use crate::manifest::ALL_LABEL;

/// Default output file name
pub const COUNT_FILE_NAME: &str = "ngram-count-results.txt";

/// Count summary formatter
#[derive(Debug)]
pub struct CountReport<'a> {
    report: &'a AnalysisReport,
}

impl<'a> CountReport<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report }
    }

    fn header(&self) -> String {
        let n = self.report.ngram_size;
        format!(
            "Benchmark, Unique {n}-gram (per implementation, total for benchmark, total for all), Total {n}-gram"
        )
    }

    fn row(
        label: &str,
        unique: usize,
        group_unique: usize,
        all_unique: usize,
        total: usize,
    ) -> String {
        format!(
            "{}, {}/{:.2}/{:.2}, {}",
            label,
            unique,
            percent(unique, group_unique),
            percent(unique, all_unique),
            total
        )
    }

    /// Generate the report as string
    pub fn to_text(&self) -> String {
        let report = self.report;
        let mut lines = vec![self.header()];

        for group in &report.groups {
            for &index in &group.files {
                let file = &report.files[index];
                lines.push(Self::row(
                    &file.input.name,
                    file.summary.distinct,
                    group.distinct,
                    report.distinct,
                    file.summary.total,
                ));
            }

            lines.push(Self::row(
                &format!("{} ({})", group.benchmark, ALL_LABEL),
                group.distinct,
                group.distinct,
                report.distinct,
                group.total,
            ));
        }

        lines.push(Self::row(
            ALL_LABEL,
            report.distinct,
            report.distinct,
            report.distinct,
            report.total,
        ));

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyse_sequence;
    use crate::instruction::Instruction::{AddInt, Goto, IfGe, MulInt};
    use crate::manifest::InputFile;
    use crate::sequence::NgramSize;

    #[test]
    fn test_grouped_report() {
        let size = NgramSize::new(2).unwrap();
        let input = |name: &str, benchmark: &str| InputFile::new(name).with_benchmark(benchmark);
        let files = vec![
            analyse_sequence(size, input("j-fasta", "fasta"), &[AddInt, Goto, AddInt]).unwrap(),
            analyse_sequence(size, input("j-nbody", "nbody"), &[IfGe, MulInt]).unwrap(),
            analyse_sequence(size, input("k-fasta", "fasta"), &[AddInt, Goto]).unwrap(),
        ];
        let report = AnalysisReport::from_files(size, files);
        let text = CountReport::new(&report).to_text();

        assert_eq!(
            text,
            "Benchmark, Unique 2-gram (per implementation, total for benchmark, total for all), Total 2-gram\n\
             j-fasta, 2/100.00/66.67, 2\n\
             k-fasta, 1/50.00/33.33, 1\n\
             fasta (all), 2/100.00/66.67, 3\n\
             j-nbody, 1/100.00/33.33, 1\n\
             nbody (all), 1/100.00/33.33, 1\n\
             all, 3/100.00/100.00, 4\n"
        );
    }

    #[test]
    fn test_no_division_by_zero() {
        let size = NgramSize::new(4).unwrap();
        let files = vec![analyse_sequence(size, InputFile::new("tiny"), &[AddInt]).unwrap()];
        let report = AnalysisReport::from_files(size, files);
        let text = CountReport::new(&report).to_text();

        assert!(text.contains("tiny, 0/0.00/0.00, 0"));
        assert!(text.contains("ungrouped (all), 0/0.00/0.00, 0"));
        assert!(text.ends_with("all, 0/0.00/0.00, 0\n"));
    }
}
