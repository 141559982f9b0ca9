//! Property-based tests for the rule engine.
//!
//! These tests use proptest to generate random tables and cell values and
//! verify that the rules keep their invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: the engine never fails on schema-valid input
//! 2. **Determinism**: the same table always produces the same report
//! 3. **Exclusivity**: a blank cell is only ever reported as blank
//! 4. **Ordering**: findings within a category are row-ascending
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p titlecheck --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p titlecheck --test property_tests
//! ```

use proptest::prelude::*;

use titlecheck::validation::{disallowed_characters, is_valid_age_rating, is_valid_rating_date};
use titlecheck::{COLUMNS, DataTable, RuleCategory, validate};

// =============================================================================
// Test Strategies
// =============================================================================

/// A cell: absent, empty, or a value drawn from plausible and hostile text.
fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(String::new())),
        2 => prop::sample::select(vec!["None", "Low", "Medium", "High", "2", "147", "G1", "G2"])
            .prop_map(|s| Some(s.to_string())),
        1 => "[0-9]{1,3}".prop_map(Some),
        1 => "(0[1-9]|1[0-2])/[0-3][0-9]/[0-9]{4}".prop_map(Some),
        1 => any::<String>().prop_map(Some),
    ]
}

/// A table with every required column and up to 20 rows.
fn table() -> impl Strategy<Value = DataTable> {
    prop::collection::vec(prop::collection::vec(cell(), COLUMNS.len()), 0..20).prop_map(|rows| {
        DataTable::new(COLUMNS.iter().map(|c| c.name.to_string()).collect(), rows)
    })
}

fn blank_cells(table: &DataTable) -> Vec<(usize, String)> {
    let mut cells = Vec::new();
    for row in table.iter_rows() {
        for column in COLUMNS {
            if !column.kind.allows_blank() && DataTable::is_blank(row.get(column.name)) {
                cells.push((row.number(), column.name.to_string()));
            }
        }
    }
    cells
}

// =============================================================================
// Engine Properties
// =============================================================================

proptest! {
    #[test]
    fn engine_never_fails_on_valid_schema(table in table()) {
        let report = validate(&table).expect("schema-valid tables always validate");
        let json = serde_json::to_value(&report).unwrap();
        prop_assert_eq!(json["errors"].as_object().unwrap().len(), 7);
    }

    #[test]
    fn engine_is_deterministic(table in table()) {
        let first = serde_json::to_string(&validate(&table).unwrap()).unwrap();
        let second = serde_json::to_string(&validate(&table).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blank_cells_match_table(table in table()) {
        let report = validate(&table).unwrap();

        let reported: Vec<(usize, String)> = report
            .errors
            .blank_cells
            .iter()
            .flat_map(|f| f.columns.iter().map(move |c| (f.row, c.clone())))
            .collect();
        prop_assert_eq!(reported, blank_cells(&table));
    }

    #[test]
    fn blank_values_never_reach_format_rules(table in table()) {
        let report = validate(&table).unwrap();

        prop_assert!(report.errors.invalid_age_rating.iter().all(|f| !f.value.is_empty()));
        prop_assert!(report.errors.invalid_date_format.iter().all(|f| !f.value.is_empty()));
        prop_assert!(report.errors.invalid_impact_value.iter().all(|f| !f.value.is_empty()));
        prop_assert!(report.errors.non_english_characters.iter().all(|f| !f.value.is_empty()));
        prop_assert!(report
            .errors
            .invalid_country_or_language
            .iter()
            .all(|f| !(f.countries.is_empty() && f.languages.is_empty())));
    }

    #[test]
    fn findings_are_row_ascending(table in table()) {
        let report = validate(&table).unwrap();

        for category in RuleCategory::ALL {
            let rows: Vec<usize> = report
                .findings(category)
                .iter()
                .map(|f| f.rows()[0])
                .collect();
            let mut sorted = rows.clone();
            sorted.sort();
            prop_assert_eq!(rows, sorted);
        }
    }

    #[test]
    fn duplicate_clusters_are_complete(table in table()) {
        let report = validate(&table).unwrap();
        let ids: Vec<Option<&str>> = table.iter_rows().map(|r| r.get("GTI")).collect();

        for cluster in &report.errors.duplicate_identifier {
            let expected: Vec<usize> = ids
                .iter()
                .enumerate()
                .filter(|(_, id)| **id == Some(cluster.value.as_str()))
                .map(|(i, _)| i + 2)
                .collect();
            prop_assert!(cluster.rows.len() >= 2);
            prop_assert_eq!(&cluster.rows, &expected);
        }
    }
}

// =============================================================================
// Predicate Properties
// =============================================================================

proptest! {
    #[test]
    fn non_ascii_always_disallowed(s in "\\PC*") {
        let invalid = disallowed_characters(&s);
        let non_ascii: String = s.chars().filter(|c| !c.is_ascii()).collect();
        prop_assert!(non_ascii.chars().all(|c| invalid.contains(c)));
        prop_assert!(invalid.chars().count() >= non_ascii.chars().count());
    }

    #[test]
    fn plain_english_text_allowed(s in "[A-Za-z0-9 .,&()'\"!?;:-]{0,60}") {
        prop_assert_eq!(disallowed_characters(&s), "");
    }

    #[test]
    fn well_formed_dates_accepted(m in 1u32..=12, d in 1u32..=31, y in 0u32..=9999) {
        let date = format!("{m:02}/{d:02}/{y:04}");
        prop_assert!(is_valid_rating_date(&date));
    }

    #[test]
    fn month_above_twelve_rejected(m in 13u32..=99, d in 1u32..=31, y in 1000u32..=9999) {
        let date = format!("{m:02}/{d:02}/{y}");
        prop_assert!(!is_valid_rating_date(&date));
    }

    #[test]
    fn age_rating_accepts_only_allowed(n in 0u32..100_000) {
        let expected = [2, 9, 154, 147].contains(&n);
        prop_assert_eq!(is_valid_age_rating(&n.to_string()), expected);
    }
}
