#![no_main]

use dexgram::extract::extract_from_str;
use dexgram::manifest::{InputFile, Manifest};
use dexgram::sequence::{compute_frequency, compute_uniqueness, MAX_NGRAM_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // None of these may panic regardless of input
        let sequence = extract_from_str(input);
        for n in 1..=MAX_NGRAM_SIZE {
            let table = compute_frequency(n, &sequence).unwrap();
            let summary = compute_uniqueness(n, &sequence).unwrap();
            assert_eq!(table.len(), summary.distinct);
            assert!(summary.distinct <= summary.total);
        }

        let _ = InputFile::from_path_arg(input);
        let _ = InputFile::from_label_arg(input);
        let _ = Manifest::from_toml_str(input);
    }
});
