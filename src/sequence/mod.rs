// N-gram Sequence Analysis for Dalvik instruction idioms
//
// Counts the consecutive instruction windows a compiler emits so that
// implementation variants of the same benchmark (Java, Kotlin converted from
// Java, idiomatic Kotlin) can be compared by the instruction patterns they
// produce rather than by raw instruction counts.
//
// Method boundaries split the sequence: a window that touches a boundary is
// not a real code idiom and is never counted.

mod ngram;

pub use ngram::{
    compute_frequency, compute_uniqueness, count_windows, distinct_windows, top_windows,
    window_to_string, CountSummary, FrequencyTable, NgramSize, Window, WindowCounts,
    MAX_NGRAM_SIZE,
};
