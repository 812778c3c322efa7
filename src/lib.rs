//! dexgram - N-gram analysis of Dalvik bytecode listings
//!
//! This library turns bytecode listings into instruction sequences and
//! computes n-gram frequency and uniqueness statistics across benchmark
//! implementation variants, with CSV and text reports of the results.

pub mod analysis;
pub mod cli;
pub mod count_output;
pub mod csv_output;
pub mod error;
pub mod extract;
pub mod instruction;
pub mod json_output;
pub mod manifest;
pub mod sequence;

pub use error::{AnalysisError, Result};
