//! The fixed rule set applied to every title metadata table.
//!
//! Blank cells belong to [`BlankValueRule`] alone. The format rules skip
//! blank values so one empty cell never shows up in two categories.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::{DataTable, HEADER_ROW_OFFSET};
use crate::schema::{BoundColumns, ColumnKind};

use super::report::{
    BlankCells, DuplicateIdentifier, Finding, InvalidAgeRating, InvalidCountryOrLanguage,
    InvalidDateFormat, InvalidImpactValue, NonEnglishCharacters, RuleCategory,
};

/// Allowed Age Rating ID values.
pub const ALLOWED_AGE_RATINGS: [u32; 4] = [2, 9, 154, 147];

/// Allowed impact column values (case-sensitive).
pub const IMPACT_VALUES: [&str; 4] = ["None", "Low", "Medium", "High"];

/// Punctuation allowed in free-text columns besides letters, digits and
/// whitespace.
pub const ALLOWED_PUNCTUATION: &str = ".,&()'\"-!?;:";

/// `MM/DD/YYYY`; the day is bounded structurally, not by the calendar.
static RATING_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$")
        .expect("rating date pattern is valid")
});

/// Anything outside ASCII letters, digits, ASCII whitespace and the
/// allowed punctuation.
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"[^A-Za-z0-9 \t\r\n\x0C{}]",
        regex::escape(ALLOWED_PUNCTUATION)
    );
    Regex::new(&pattern).expect("disallowed character pattern is valid")
});

/// Check a Rating Date value against `MM/DD/YYYY`.
///
/// `02/30/2024` passes: only the shape and the day range 01-31 are checked.
pub fn is_valid_rating_date(value: &str) -> bool {
    RATING_DATE.is_match(value)
}

/// The disallowed characters of a free-text value, concatenated in order.
pub fn disallowed_characters(value: &str) -> String {
    DISALLOWED_CHARS
        .find_iter(value)
        .map(|m| m.as_str())
        .collect()
}

/// True for a non-empty string of ASCII decimal digits.
pub fn is_numeric_code(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Check an Age Rating ID, comparing the decimal value so `"002"` and
/// `" 2 "` both count as 2.
pub fn is_valid_age_rating(value: &str) -> bool {
    let trimmed = value.trim();
    is_numeric_code(trimmed)
        && trimmed
            .parse::<u32>()
            .is_ok_and(|v| ALLOWED_AGE_RATINGS.contains(&v))
}

/// Check an impact column value.
pub fn is_valid_impact_value(value: &str) -> bool {
    IMPACT_VALUES.contains(&value)
}

/// A data-quality rule run over a whole table.
pub trait Rule: Send + Sync {
    /// Category the rule reports under.
    fn category(&self) -> RuleCategory;

    /// Run the rule and return findings in row-ascending order.
    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding>;
}

/// Flags required values that are absent or empty.
///
/// One finding per row listing every blank column. "Other title names" is
/// exempt; `None` in an impact column is content, not a blank.
pub struct BlankValueRule;

impl Rule for BlankValueRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::BlankCells
    }

    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding> {
        table
            .iter_rows()
            .filter_map(|row| {
                let blank: Vec<String> = columns
                    .iter()
                    .filter(|c| !c.kind().allows_blank())
                    .filter(|c| DataTable::is_blank(row.get_at(c.position)))
                    .map(|c| c.name().to_string())
                    .collect();

                (!blank.is_empty()).then(|| {
                    Finding::BlankCells(BlankCells {
                        row: row.number(),
                        columns: blank,
                    })
                })
            })
            .collect()
    }
}

/// Flags free-text cells with characters outside the English set.
pub struct NonEnglishRule;

impl Rule for NonEnglishRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::NonEnglishCharacters
    }

    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding> {
        let mut findings = Vec::new();

        for row in table.iter_rows() {
            for column in columns.free_text() {
                let Some(value) = row.get_at(column.position) else {
                    continue;
                };

                let invalid_chars = disallowed_characters(value);
                if !invalid_chars.is_empty() {
                    findings.push(Finding::NonEnglishCharacters(NonEnglishCharacters {
                        row: row.number(),
                        column: column.name().to_string(),
                        value: value.to_string(),
                        invalid_chars,
                    }));
                }
            }
        }

        findings
    }
}

/// Groups rows sharing a GTI and reports every member of each group.
pub struct DuplicateIdentifierRule;

impl Rule for DuplicateIdentifierRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::DuplicateIdentifier
    }

    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding> {
        let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();

        for (row_idx, value) in table.column_values(columns.identifier.position).enumerate() {
            // Missing identifiers are a blank-cell problem, not a duplicate.
            let Some(value) = value.filter(|v| !v.is_empty()) else {
                continue;
            };
            groups
                .entry(value)
                .or_default()
                .push(row_idx + HEADER_ROW_OFFSET);
        }

        groups
            .into_iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|(value, rows)| {
                Finding::DuplicateIdentifier(DuplicateIdentifier {
                    value: value.to_string(),
                    rows,
                })
            })
            .collect()
    }
}

/// Requires Countries and Languages to be numeric codes.
pub struct CountryLanguageRule;

impl Rule for CountryLanguageRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::InvalidCountryOrLanguage
    }

    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding> {
        let non_numeric = |value: Option<&str>| {
            value.is_some_and(|v| !v.is_empty() && !is_numeric_code(v))
        };

        table
            .iter_rows()
            .filter_map(|row| {
                let countries = row.get_at(columns.countries.position);
                let languages = row.get_at(columns.languages.position);

                (non_numeric(countries) || non_numeric(languages)).then(|| {
                    Finding::InvalidCountryOrLanguage(InvalidCountryOrLanguage {
                        row: row.number(),
                        countries: countries.unwrap_or_default().to_string(),
                        languages: languages.unwrap_or_default().to_string(),
                    })
                })
            })
            .collect()
    }
}

/// Requires Age Rating ID to be one of the allowed ratings.
pub struct AgeRatingRule;

impl Rule for AgeRatingRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::InvalidAgeRating
    }

    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding> {
        table
            .column_values(columns.age_rating.position)
            .enumerate()
            .filter_map(|(row_idx, value)| {
                let value = value.filter(|v| !v.is_empty())?;
                (!is_valid_age_rating(value)).then(|| {
                    Finding::InvalidAgeRating(InvalidAgeRating {
                        row: row_idx + HEADER_ROW_OFFSET,
                        value: value.to_string(),
                    })
                })
            })
            .collect()
    }
}

/// Requires Rating Date in `MM/DD/YYYY` form.
pub struct RatingDateRule;

impl Rule for RatingDateRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::InvalidDateFormat
    }

    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding> {
        table
            .column_values(columns.rating_date.position)
            .enumerate()
            .filter_map(|(row_idx, value)| {
                let value = value.filter(|v| !v.is_empty())?;
                (!is_valid_rating_date(value)).then(|| {
                    Finding::InvalidDateFormat(InvalidDateFormat {
                        row: row_idx + HEADER_ROW_OFFSET,
                        value: value.to_string(),
                    })
                })
            })
            .collect()
    }
}

/// Requires each impact column to hold None, Low, Medium or High.
pub struct ImpactValueRule;

impl Rule for ImpactValueRule {
    fn category(&self) -> RuleCategory {
        RuleCategory::InvalidImpactValue
    }

    fn check(&self, table: &DataTable, columns: &BoundColumns) -> Vec<Finding> {
        let mut findings = Vec::new();

        for row in table.iter_rows() {
            for column in columns.of_kind(ColumnKind::Impact) {
                let Some(value) = row.get_at(column.position).filter(|v| !v.is_empty()) else {
                    continue;
                };

                if !is_valid_impact_value(value) {
                    findings.push(Finding::InvalidImpactValue(InvalidImpactValue {
                        row: row.number(),
                        column: column.name().to_string(),
                        value: value.to_string(),
                    }));
                }
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::COLUMNS;

    fn valid_row() -> Vec<(&'static str, &'static str)> {
        vec![
            ("GTI", "G1"),
            ("Entity", "Film"),
            ("Title Name", "The Long Road"),
            ("Other title names", ""),
            ("Duration", "95"),
            ("Producers", "Jane Doe"),
            ("Directors", "John Smith"),
            ("Production Company Name", "Acme Pictures"),
            ("Year of Production", "2019"),
            ("Countries", "36"),
            ("Languages", "12"),
            ("Is Version Original", "Yes"),
            ("Age Rating ID", "9"),
            ("Content Descriptors", "Mild themes"),
            ("Violence Impact", "Low"),
            ("Drug Use Impact", "None"),
            ("Themes Impact", "Medium"),
            ("Language Impact", "None"),
            ("Nudity Impact", "None"),
            ("Sex Impact", "High"),
            ("ACB Rated", "No"),
            ("Different Version Production Exists", "No"),
            ("Rating Date", "03/15/2021"),
        ]
    }

    /// Build a table of valid rows, applying per-row overrides.
    fn make_table(overrides: Vec<Vec<(&str, Option<&str>)>>) -> DataTable {
        let headers: Vec<String> = COLUMNS.iter().map(|c| c.name.to_string()).collect();
        let rows = overrides
            .into_iter()
            .map(|changes| {
                valid_row()
                    .into_iter()
                    .map(|(name, value)| {
                        match changes.iter().find(|(n, _)| *n == name) {
                            Some((_, v)) => v.map(String::from),
                            None => Some(value.to_string()),
                        }
                    })
                    .collect()
            })
            .collect();
        DataTable::new(headers, rows)
    }

    fn run(rule: &dyn Rule, table: &DataTable) -> Vec<Finding> {
        let columns = BoundColumns::bind(&table.headers).unwrap();
        rule.check(table, &columns)
    }

    #[test]
    fn test_valid_rows_pass_every_rule() {
        let table = make_table(vec![vec![], vec![("GTI", Some("G2"))]]);
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(BlankValueRule),
            Box::new(NonEnglishRule),
            Box::new(DuplicateIdentifierRule),
            Box::new(CountryLanguageRule),
            Box::new(AgeRatingRule),
            Box::new(RatingDateRule),
            Box::new(ImpactValueRule),
        ];

        for rule in &rules {
            assert!(run(rule.as_ref(), &table).is_empty(), "{:?}", rule.category());
        }
    }

    #[test]
    fn test_blank_lists_every_column_in_one_finding() {
        let table = make_table(vec![vec![
            ("Entity", Some("")),
            ("Duration", None),
            ("Sex Impact", Some("")),
        ]]);

        let findings = run(&BlankValueRule, &table);
        assert_eq!(
            findings,
            vec![Finding::BlankCells(BlankCells {
                row: 2,
                columns: vec![
                    "Entity".to_string(),
                    "Duration".to_string(),
                    "Sex Impact".to_string()
                ],
            })]
        );
    }

    #[test]
    fn test_blank_exempts_other_title_names() {
        let table = make_table(vec![vec![("Other title names", None)]]);
        assert!(run(&BlankValueRule, &table).is_empty());
    }

    #[test]
    fn test_impact_none_is_not_blank() {
        let table = make_table(vec![vec![
            ("Violence Impact", Some("None")),
            ("Sex Impact", Some("None")),
        ]]);
        assert!(run(&BlankValueRule, &table).is_empty());
        assert!(run(&ImpactValueRule, &table).is_empty());
    }

    #[test]
    fn test_non_english_extracts_characters() {
        let table = make_table(vec![vec![
            ("Title Name", Some("Amélie à Paris")),
            ("Directors", Some("Jean-Pierre Jeunet")),
            ("Producers", Some("Claudie Ossard #1")),
        ]]);

        let findings = run(&NonEnglishRule, &table);
        assert_eq!(findings.len(), 2);
        assert_eq!(
            findings[0],
            Finding::NonEnglishCharacters(NonEnglishCharacters {
                row: 2,
                column: "Title Name".to_string(),
                value: "Amélie à Paris".to_string(),
                invalid_chars: "éà".to_string(),
            })
        );
        match &findings[1] {
            Finding::NonEnglishCharacters(f) => {
                assert_eq!(f.column, "Producers");
                assert_eq!(f.invalid_chars, "#");
            }
            other => panic!("unexpected finding {other:?}"),
        }
    }

    #[test]
    fn test_non_english_checks_other_title_names() {
        let table = make_table(vec![vec![("Other title names", Some("東京物語"))]]);
        let findings = run(&NonEnglishRule, &table);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_allowed_punctuation() {
        assert_eq!(disallowed_characters("Star Wars: Episode IV - A New Hope"), "");
        assert_eq!(disallowed_characters("Who's \"Afraid\"? (Yes!); & more."), "");
        assert_eq!(disallowed_characters("Tabs\tand\nnewlines"), "");
        assert_eq!(disallowed_characters("50% off @ store"), "%@");
        assert_eq!(disallowed_characters("non\u{a0}breaking"), "\u{a0}");
        assert_eq!(disallowed_characters("em—dash"), "—");
    }

    #[test]
    fn test_every_allowed_punctuation_mark_passes() {
        for c in ALLOWED_PUNCTUATION.chars() {
            assert_eq!(disallowed_characters(&c.to_string()), "", "{c:?}");
        }
        assert_eq!(disallowed_characters(ALLOWED_PUNCTUATION), "");
        assert_eq!(disallowed_characters("[]/\\#*+"), "[]/\\#*+");
    }

    #[test]
    fn test_duplicates_report_all_rows() {
        // Zero-based rows 3, 7 and 9 share "X".
        let ids = ["A", "B", "C", "X", "D", "E", "F", "X", "G", "X"];
        let table = make_table(ids.iter().map(|id| vec![("GTI", Some(*id))]).collect());

        let findings = run(&DuplicateIdentifierRule, &table);
        assert_eq!(
            findings,
            vec![Finding::DuplicateIdentifier(DuplicateIdentifier {
                value: "X".to_string(),
                rows: vec![5, 9, 11],
            })]
        );
    }

    #[test]
    fn test_duplicates_ordered_by_first_row() {
        let table = make_table(vec![
            vec![("GTI", Some("B"))],
            vec![("GTI", Some("A"))],
            vec![("GTI", Some("A"))],
            vec![("GTI", Some("B"))],
        ]);

        let values: Vec<String> = run(&DuplicateIdentifierRule, &table)
            .into_iter()
            .map(|f| match f {
                Finding::DuplicateIdentifier(d) => d.value,
                other => panic!("unexpected finding {other:?}"),
            })
            .collect();
        assert_eq!(values, vec!["B", "A"]);
    }

    #[test]
    fn test_missing_identifiers_not_clustered() {
        let table = make_table(vec![
            vec![("GTI", None)],
            vec![("GTI", None)],
            vec![("GTI", Some(""))],
        ]);
        assert!(run(&DuplicateIdentifierRule, &table).is_empty());
    }

    #[test]
    fn test_country_language_carries_both_values() {
        let table = make_table(vec![vec![("Countries", Some("36, 12"))]]);

        let findings = run(&CountryLanguageRule, &table);
        assert_eq!(
            findings,
            vec![Finding::InvalidCountryOrLanguage(InvalidCountryOrLanguage {
                row: 2,
                countries: "36, 12".to_string(),
                languages: "12".to_string(),
            })]
        );
    }

    #[test]
    fn test_country_language_blank_left_to_blank_rule() {
        let table = make_table(vec![vec![("Languages", Some(""))]]);
        assert!(run(&CountryLanguageRule, &table).is_empty());

        let table = make_table(vec![vec![("Countries", Some("AU")), ("Languages", None)]]);
        let findings = run(&CountryLanguageRule, &table);
        assert_eq!(findings.len(), 1);
        match &findings[0] {
            Finding::InvalidCountryOrLanguage(f) => assert_eq!(f.languages, ""),
            other => panic!("unexpected finding {other:?}"),
        }
    }

    #[test]
    fn test_numeric_code() {
        assert!(is_numeric_code("0"));
        assert!(is_numeric_code("036"));
        assert!(!is_numeric_code(""));
        assert!(!is_numeric_code("3.5"));
        assert!(!is_numeric_code("-1"));
        assert!(!is_numeric_code("²"));
        assert!(!is_numeric_code("١٢"));
    }

    #[test]
    fn test_age_rating_values() {
        for ok in ["2", "9", "154", "147", "002", " 9 "] {
            assert!(is_valid_age_rating(ok), "{ok}");
        }
        for bad in ["10", "", " ", "2.5", "G", "99999999999999999999"] {
            assert!(!is_valid_age_rating(bad), "{bad}");
        }
    }

    #[test]
    fn test_age_rating_blank_left_to_blank_rule() {
        let table = make_table(vec![
            vec![("Age Rating ID", Some(""))],
            vec![("Age Rating ID", Some("10"))],
        ]);

        let findings = run(&AgeRatingRule, &table);
        assert_eq!(
            findings,
            vec![Finding::InvalidAgeRating(InvalidAgeRating {
                row: 3,
                value: "10".to_string(),
            })]
        );
    }

    #[test]
    fn test_rating_date_pattern() {
        assert!(is_valid_rating_date("01/01/2024"));
        assert!(is_valid_rating_date("12/31/1999"));
        // Calendar days are not checked.
        assert!(is_valid_rating_date("02/30/2024"));
        assert!(!is_valid_rating_date("2024/02/01"));
        assert!(!is_valid_rating_date("13/01/2024"));
        assert!(!is_valid_rating_date("00/10/2024"));
        assert!(!is_valid_rating_date("01/32/2024"));
        assert!(!is_valid_rating_date("1/5/2024"));
        assert!(!is_valid_rating_date("01/05/24"));
        assert!(!is_valid_rating_date("01/05/2024 "));
        assert!(!is_valid_rating_date("01/05/٢٠٢٤"));
    }

    #[test]
    fn test_rating_date_rule() {
        let table = make_table(vec![
            vec![("Rating Date", Some("2024/02/01"))],
            vec![("Rating Date", None)],
            vec![("Rating Date", Some("02/30/2024"))],
        ]);

        let findings = run(&RatingDateRule, &table);
        assert_eq!(
            findings,
            vec![Finding::InvalidDateFormat(InvalidDateFormat {
                row: 2,
                value: "2024/02/01".to_string(),
            })]
        );
    }

    #[test]
    fn test_impact_per_cell() {
        let table = make_table(vec![vec![
            ("Violence Impact", Some("Severe")),
            ("Nudity Impact", Some("low")),
            ("Sex Impact", Some("")),
        ]]);

        let findings = run(&ImpactValueRule, &table);
        let cells: Vec<(String, String)> = findings
            .into_iter()
            .map(|f| match f {
                Finding::InvalidImpactValue(i) => (i.column, i.value),
                other => panic!("unexpected finding {other:?}"),
            })
            .collect();
        assert_eq!(
            cells,
            vec![
                ("Violence Impact".to_string(), "Severe".to_string()),
                ("Nudity Impact".to_string(), "low".to_string()),
            ]
        );
    }
}
