//! Fuzz target for the rule engine.
//!
//! Builds a table with the full header and arbitrary cells, then checks
//! that validation succeeds and never reports a row outside the table.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use titlecheck::{COLUMNS, DataTable, validate};

#[derive(Arbitrary, Debug)]
struct Input {
    rows: Vec<Vec<Option<String>>>,
}

fuzz_target!(|input: Input| {
    if input.rows.len() > 500 {
        return;
    }

    let headers = COLUMNS.iter().map(|c| c.name.to_string()).collect();
    let table = DataTable::new(headers, input.rows);
    let last_row = table.row_count() + 1;

    let report = validate(&table).expect("full header always binds");
    assert!(report.rows_with_findings().iter().all(|r| (2..=last_row).contains(r)));
});
