use crate::error::{AnalysisError, Result};
use crate::instruction::Instruction;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Largest supported window size
pub const MAX_NGRAM_SIZE: usize = 4;

/// Type alias for an N-gram window (exactly `n` consecutive instructions)
pub type Window = Vec<Instruction>;

/// Relative frequency of each valid window in one sequence
pub type FrequencyTable = BTreeMap<Window, f64>;

/// Validated window size in `1..=MAX_NGRAM_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NgramSize(usize);

impl NgramSize {
    pub fn new(n: usize) -> Result<Self> {
        if (1..=MAX_NGRAM_SIZE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(AnalysisError::InvalidArgument(format!(
                "n-gram size {} out of range (must be 1..={})",
                n, MAX_NGRAM_SIZE
            )))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for NgramSize {
    type Error = AnalysisError;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl fmt::Display for NgramSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distinct vs total valid windows for one sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Number of distinct valid windows
    pub distinct: usize,
    /// Number of valid windows counted (with repetition)
    pub total: usize,
}

impl CountSummary {
    /// Distinct windows per counted window
    ///
    /// High coverage indicates diverse instruction patterns.
    /// Low coverage indicates repetitive code (tight loops, unrolled bodies).
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.distinct as f64 / self.total as f64
    }
}

/// Occurrence count of every valid window plus the number counted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub counts: BTreeMap<Window, usize>,
    pub total: usize,
}

impl WindowCounts {
    /// Normalize counts by the total; empty when nothing was counted
    pub fn frequencies(&self) -> FrequencyTable {
        if self.total == 0 {
            return FrequencyTable::new();
        }

        let total = self.total as f64;
        self.counts
            .iter()
            .map(|(window, &count)| (window.clone(), count as f64 / total))
            .collect()
    }

    pub fn summary(&self) -> CountSummary {
        CountSummary {
            distinct: self.counts.len(),
            total: self.total,
        }
    }

    pub fn into_windows(self) -> BTreeSet<Window> {
        self.counts.into_keys().collect()
    }
}

/// Slide a window of width `n` over the sequence and count every valid window
///
/// Windows touching [`Instruction::Boundary`] are skipped so that no window
/// spans two method bodies. Every statistic in this module is derived from
/// this traversal.
///
/// # Example
/// ```
/// use dexgram::instruction::Instruction::{AddInt, Boundary, MulInt};
/// use dexgram::sequence::count_windows;
///
/// let counts = count_windows(2, &[AddInt, MulInt, Boundary, AddInt, MulInt]).unwrap();
/// assert_eq!(counts.total, 2);
/// assert_eq!(counts.counts.get(&vec![AddInt, MulInt]), Some(&2));
/// ```
pub fn count_windows(n: usize, sequence: &[Instruction]) -> Result<WindowCounts> {
    let size = NgramSize::new(n)?;
    let mut windows = WindowCounts::default();

    // `windows()` yields nothing when the sequence is shorter than `n`
    for window in sequence.windows(size.get()) {
        if window.iter().any(|inst| inst.is_boundary()) {
            continue;
        }

        if let Some(count) = windows.counts.get_mut(window) {
            *count += 1;
        } else {
            windows.counts.insert(window.to_vec(), 1);
        }
        windows.total += 1;
    }

    Ok(windows)
}

/// Relative frequency of every valid window of width `n`
pub fn compute_frequency(n: usize, sequence: &[Instruction]) -> Result<FrequencyTable> {
    Ok(count_windows(n, sequence)?.frequencies())
}

/// Number of distinct valid windows and number of valid windows of width `n`
pub fn compute_uniqueness(n: usize, sequence: &[Instruction]) -> Result<CountSummary> {
    Ok(count_windows(n, sequence)?.summary())
}

/// Set of distinct valid windows of width `n`
pub fn distinct_windows(n: usize, sequence: &[Instruction]) -> Result<BTreeSet<Window>> {
    Ok(count_windows(n, sequence)?.into_windows())
}

/// Find the most frequent windows (useful for identifying hot idioms)
///
/// Ties are broken by window order so the result is stable across runs.
pub fn top_windows(table: &FrequencyTable, k: usize) -> Vec<(Window, f64)> {
    let mut ranked: Vec<_> = table
        .iter()
        .map(|(window, &freq)| (window.clone(), freq))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    ranked.into_iter().take(k).collect()
}

/// Render a window as its mnemonics separated by single spaces
pub fn window_to_string(window: &[Instruction]) -> String {
    window
        .iter()
        .map(|inst| inst.mnemonic())
        .collect::<Vec<_>>()
        .join(" ")
}
