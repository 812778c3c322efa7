//! CSV frequency matrix for spreadsheet analysis
//!
//! One column per input file, one row per n-gram observed in at least one
//! file. Three header rows carry the file name, benchmark and implementation
//! labels. Every field is double-quoted.

use crate::analysis::AnalysisReport;
use crate::sequence::window_to_string;

/// Default output file name
pub const FREQUENCY_FILE_NAME: &str = "ngram-frequency-results.csv";

/// CSV frequency matrix formatter
#[derive(Debug)]
pub struct FrequencyMatrix<'a> {
    report: &'a AnalysisReport,
}

impl<'a> FrequencyMatrix<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report }
    }

    /// Quote a CSV field, doubling embedded quotes
    fn quote_field(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }

    fn label_row(&self, title: &str, label: impl Fn(usize) -> String) -> String {
        let mut fields = vec![Self::quote_field(title)];
        fields.extend((0..self.report.files.len()).map(|i| Self::quote_field(&label(i))));
        fields.join(",")
    }

    /// Generate the three header rows
    fn header(&self) -> String {
        let files = &self.report.files;
        [
            self.label_row("ngram", |i| files[i].input.name.clone()),
            self.label_row("benchmark", |i| files[i].input.benchmark.clone()),
            self.label_row("implementation", |i| files[i].input.implementation.clone()),
        ]
        .join("\n")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header());
        output.push('\n');

        for window in self.report.all_windows() {
            output.push_str(&Self::quote_field(&window_to_string(window)));

            for file in &self.report.files {
                let freq = file.frequency.get(window).copied().unwrap_or(0.0);
                output.push(',');
                output.push_str(&Self::quote_field(&freq.to_string()));
            }

            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyse_sequence;
    use crate::instruction::Instruction::{AddInt, Goto, MulInt};
    use crate::manifest::InputFile;
    use crate::sequence::NgramSize;

    fn report() -> AnalysisReport {
        let size = NgramSize::new(2).unwrap();
        let files = vec![
            analyse_sequence(
                size,
                InputFile::new("java/NBody.smali")
                    .with_benchmark("nbody")
                    .with_implementation("java"),
                &[AddInt, Goto, AddInt, Goto],
            )
            .unwrap(),
            analyse_sequence(
                size,
                InputFile::new("kt/NBody.smali")
                    .with_benchmark("nbody")
                    .with_implementation("kotlin-idiomatic"),
                &[MulInt, Goto],
            )
            .unwrap(),
        ];
        AnalysisReport::from_files(size, files)
    }

    #[test]
    fn test_quote_field() {
        assert_eq!(FrequencyMatrix::quote_field("hello"), "\"hello\"");
        assert_eq!(
            FrequencyMatrix::quote_field("say \"hi\""),
            "\"say \"\"hi\"\"\""
        );
        assert_eq!(FrequencyMatrix::quote_field(""), "\"\"");
    }

    #[test]
    fn test_header_rows() {
        let report = report();
        let matrix = FrequencyMatrix::new(&report);
        assert_eq!(
            matrix.header(),
            "\"ngram\",\"java/NBody.smali\",\"kt/NBody.smali\"\n\
             \"benchmark\",\"nbody\",\"nbody\"\n\
             \"implementation\",\"java\",\"kotlin-idiomatic\""
        );
    }

    #[test]
    fn test_rows_in_window_order_with_zero_fill() {
        let report = report();
        let csv = FrequencyMatrix::new(&report).to_csv();
        let rows: Vec<&str> = csv.lines().skip(3).collect();

        assert_eq!(
            rows,
            vec![
                "\"add-int goto\",\"0.6666666666666666\",\"0\"",
                "\"goto add-int\",\"0.3333333333333333\",\"0\"",
                "\"mul-int goto\",\"0\",\"1\"",
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        let report = AnalysisReport::from_files(NgramSize::new(1).unwrap(), Vec::new());
        let csv = FrequencyMatrix::new(&report).to_csv();
        assert_eq!(csv, "\"ngram\"\n\"benchmark\"\n\"implementation\"\n");
    }
}
