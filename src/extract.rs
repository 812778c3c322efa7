//! Bytecode listing to instruction sequence extraction
//!
//! A listing is plain text; every whitespace-separated token is either a
//! method marker (`.method` / `.end`), a known mnemonic, or noise
//! (registers, type descriptors, labels, comments) that is dropped.

use crate::error::{AnalysisError, Result};
use crate::instruction::{instruction_map, Instruction};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered instruction tokens of one listing
pub type InstructionSequence = Vec<Instruction>;

/// Tokens that open or close a method body
pub const METHOD_MARKERS: [&str; 2] = [".method", ".end"];

/// Extract the instruction sequence from a listing file
///
/// Fails with [`AnalysisError::Io`] if the file cannot be opened or a line
/// cannot be read.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<InstructionSequence> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;

    let sequence = extract_from_reader(BufReader::new(file))
        .map_err(|e| AnalysisError::io(path, e))?;

    tracing::debug!(
        path = %path.display(),
        instructions = sequence.len(),
        boundaries = sequence.iter().filter(|i| i.is_boundary()).count(),
        "extracted instruction sequence"
    );

    Ok(sequence)
}

/// Extract the instruction sequence from any buffered reader
///
/// Lines are decoded lossily: string literals may hold bytes that are not
/// UTF-8, and mnemonics are ASCII so no instruction is lost.
pub fn extract_from_reader<R: BufRead>(mut reader: R) -> std::io::Result<InstructionSequence> {
    let map = instruction_map();
    let mut sequence = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        push_line_tokens(&String::from_utf8_lossy(&buf), map, &mut sequence);
    }

    Ok(sequence)
}

/// Extract the instruction sequence from listing text already in memory
///
/// # Example
/// ```
/// use dexgram::extract::extract_from_str;
/// use dexgram::instruction::Instruction;
///
/// let listing = ".method public f()V\n    const/4 v0, 0x1\n    return-void\n.end method\n";
/// assert_eq!(
///     extract_from_str(listing),
///     vec![
///         Instruction::Boundary,
///         Instruction::Const4,
///         Instruction::ReturnVoid,
///         Instruction::Boundary,
///     ]
/// );
/// ```
pub fn extract_from_str(listing: &str) -> InstructionSequence {
    let map = instruction_map();
    let mut sequence = Vec::new();

    for line in listing.lines() {
        push_line_tokens(line, map, &mut sequence);
    }

    sequence
}

fn push_line_tokens(
    line: &str,
    map: &std::collections::HashMap<&'static str, Instruction>,
    sequence: &mut InstructionSequence,
) {
    for token in line.split_whitespace() {
        if METHOD_MARKERS.contains(&token) {
            sequence.push(Instruction::Boundary);
        } else if let Some(&inst) = map.get(token) {
            sequence.push(inst);
        }
    }
}
