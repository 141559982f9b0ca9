//! Findings and the report that groups them by rule category.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::{AGE_RATING_COLUMN, ColumnKind, IDENTIFIER_COLUMN, RATING_DATE_COLUMN, column_kind};

use super::rules::{ALLOWED_AGE_RATINGS, IMPACT_VALUES};

/// Rule category a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Required values left blank.
    BlankCells,
    /// Characters outside the allowed English set in free text.
    NonEnglishCharacters,
    /// Identifier shared by more than one row.
    DuplicateIdentifier,
    /// Countries or Languages not purely numeric.
    InvalidCountryOrLanguage,
    /// Age Rating ID outside the allowed set.
    InvalidAgeRating,
    /// Rating Date not in MM/DD/YYYY form.
    InvalidDateFormat,
    /// Impact column value outside None/Low/Medium/High.
    InvalidImpactValue,
}

impl RuleCategory {
    /// Every category, in report order.
    pub const ALL: [RuleCategory; 7] = [
        RuleCategory::BlankCells,
        RuleCategory::NonEnglishCharacters,
        RuleCategory::DuplicateIdentifier,
        RuleCategory::InvalidCountryOrLanguage,
        RuleCategory::InvalidAgeRating,
        RuleCategory::InvalidDateFormat,
        RuleCategory::InvalidImpactValue,
    ];

    /// Key used in the serialized report.
    pub fn key(&self) -> &'static str {
        match self {
            RuleCategory::BlankCells => "blank_cells",
            RuleCategory::NonEnglishCharacters => "non_english_characters",
            RuleCategory::DuplicateIdentifier => "duplicate_identifier",
            RuleCategory::InvalidCountryOrLanguage => "invalid_country_or_language",
            RuleCategory::InvalidAgeRating => "invalid_age_rating",
            RuleCategory::InvalidDateFormat => "invalid_date_format",
            RuleCategory::InvalidImpactValue => "invalid_impact_value",
        }
    }

    /// Get a human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            RuleCategory::BlankCells => "Blank Cells",
            RuleCategory::NonEnglishCharacters => "Non-English Characters",
            RuleCategory::DuplicateIdentifier => "Duplicate GTI",
            RuleCategory::InvalidCountryOrLanguage => "Invalid Countries/Languages",
            RuleCategory::InvalidAgeRating => "Invalid Age Rating",
            RuleCategory::InvalidDateFormat => "Invalid Rating Date",
            RuleCategory::InvalidImpactValue => "Invalid Impact Value",
        }
    }
}

/// A row with required values left blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankCells {
    pub row: usize,
    /// Every blank required column, in schema order.
    pub columns: Vec<String>,
}

/// A free-text cell containing characters outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonEnglishCharacters {
    pub row: usize,
    pub column: String,
    pub value: String,
    /// The disallowed characters, in order of appearance.
    pub invalid_chars: String,
}

/// An identifier value shared by two or more rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateIdentifier {
    pub value: String,
    /// Every row carrying the value, ascending.
    pub rows: Vec<usize>,
}

/// A row whose Countries or Languages value is not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidCountryOrLanguage {
    pub row: usize,
    pub countries: String,
    pub languages: String,
}

/// An Age Rating ID outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidAgeRating {
    pub row: usize,
    pub value: String,
}

/// A Rating Date not matching `MM/DD/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidDateFormat {
    pub row: usize,
    pub value: String,
}

/// An impact column value outside `None/Low/Medium/High`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidImpactValue {
    pub row: usize,
    pub column: String,
    pub value: String,
}

/// A single data-quality violation produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    BlankCells(BlankCells),
    NonEnglishCharacters(NonEnglishCharacters),
    DuplicateIdentifier(DuplicateIdentifier),
    InvalidCountryOrLanguage(InvalidCountryOrLanguage),
    InvalidAgeRating(InvalidAgeRating),
    InvalidDateFormat(InvalidDateFormat),
    InvalidImpactValue(InvalidImpactValue),
}

impl Finding {
    pub fn category(&self) -> RuleCategory {
        match self {
            Finding::BlankCells(_) => RuleCategory::BlankCells,
            Finding::NonEnglishCharacters(_) => RuleCategory::NonEnglishCharacters,
            Finding::DuplicateIdentifier(_) => RuleCategory::DuplicateIdentifier,
            Finding::InvalidCountryOrLanguage(_) => RuleCategory::InvalidCountryOrLanguage,
            Finding::InvalidAgeRating(_) => RuleCategory::InvalidAgeRating,
            Finding::InvalidDateFormat(_) => RuleCategory::InvalidDateFormat,
            Finding::InvalidImpactValue(_) => RuleCategory::InvalidImpactValue,
        }
    }

    /// Human-facing row numbers the finding concerns.
    pub fn rows(&self) -> Vec<usize> {
        match self {
            Finding::BlankCells(f) => vec![f.row],
            Finding::NonEnglishCharacters(f) => vec![f.row],
            Finding::DuplicateIdentifier(f) => f.rows.clone(),
            Finding::InvalidCountryOrLanguage(f) => vec![f.row],
            Finding::InvalidAgeRating(f) => vec![f.row],
            Finding::InvalidDateFormat(f) => vec![f.row],
            Finding::InvalidImpactValue(f) => vec![f.row],
        }
    }

    /// Human-readable descriptions of the finding.
    ///
    /// Blank impact cells get their own message rather than being folded
    /// into the generic missing-values message.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Finding::BlankCells(f) => {
                let (impact, other): (Vec<&String>, Vec<&String>) = f
                    .columns
                    .iter()
                    .partition(|c| column_kind(c) == Some(ColumnKind::Impact));

                let mut messages = Vec::new();
                if !other.is_empty() {
                    let names: Vec<&str> = other.iter().map(|c| c.as_str()).collect();
                    messages.push(format!("Missing required values: {}", names.join(", ")));
                }
                for column in impact {
                    messages.push(format!(
                        "Impact column '{}' cannot be blank (Allowed: {})",
                        column,
                        IMPACT_VALUES.join(", ")
                    ));
                }
                messages
            }
            Finding::NonEnglishCharacters(f) => vec![format!(
                "Non-English characters in '{}': {}",
                f.column, f.invalid_chars
            )],
            Finding::DuplicateIdentifier(f) => {
                let rows: Vec<String> = f.rows.iter().map(|r| r.to_string()).collect();
                vec![format!(
                    "Duplicate {} '{}' (rows {})",
                    IDENTIFIER_COLUMN,
                    f.value,
                    rows.join(", ")
                )]
            }
            Finding::InvalidCountryOrLanguage(f) => vec![format!(
                "Non-numeric value in 'Countries' or 'Languages' (Countries: '{}', Languages: '{}')",
                f.countries, f.languages
            )],
            Finding::InvalidAgeRating(f) => {
                let allowed: Vec<String> =
                    ALLOWED_AGE_RATINGS.iter().map(|r| r.to_string()).collect();
                vec![format!(
                    "Invalid {} '{}' (Allowed: {})",
                    AGE_RATING_COLUMN,
                    f.value,
                    allowed.join(", ")
                )]
            }
            Finding::InvalidDateFormat(f) => vec![format!(
                "Invalid date format in '{}': '{}' (Expected: MM/DD/YYYY)",
                RATING_DATE_COLUMN, f.value
            )],
            Finding::InvalidImpactValue(f) => vec![format!(
                "Invalid value '{}' in '{}' (Allowed: {})",
                f.value,
                f.column,
                IMPACT_VALUES.join(", ")
            )],
        }
    }
}

/// Findings grouped by category. Every category is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportErrors {
    pub blank_cells: Vec<BlankCells>,
    pub non_english_characters: Vec<NonEnglishCharacters>,
    pub duplicate_identifier: Vec<DuplicateIdentifier>,
    pub invalid_country_or_language: Vec<InvalidCountryOrLanguage>,
    pub invalid_age_rating: Vec<InvalidAgeRating>,
    pub invalid_date_format: Vec<InvalidDateFormat>,
    pub invalid_impact_value: Vec<InvalidImpactValue>,
}

/// The result of one validation pass over a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub errors: ReportErrors,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding under its category.
    pub fn push(&mut self, finding: Finding) {
        let errors = &mut self.errors;
        match finding {
            Finding::BlankCells(f) => errors.blank_cells.push(f),
            Finding::NonEnglishCharacters(f) => errors.non_english_characters.push(f),
            Finding::DuplicateIdentifier(f) => errors.duplicate_identifier.push(f),
            Finding::InvalidCountryOrLanguage(f) => errors.invalid_country_or_language.push(f),
            Finding::InvalidAgeRating(f) => errors.invalid_age_rating.push(f),
            Finding::InvalidDateFormat(f) => errors.invalid_date_format.push(f),
            Finding::InvalidImpactValue(f) => errors.invalid_impact_value.push(f),
        }
    }

    /// Add several findings.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    /// All findings of one category, in report order.
    pub fn findings(&self, category: RuleCategory) -> Vec<Finding> {
        let errors = &self.errors;
        match category {
            RuleCategory::BlankCells => errors
                .blank_cells
                .iter()
                .cloned()
                .map(Finding::BlankCells)
                .collect(),
            RuleCategory::NonEnglishCharacters => errors
                .non_english_characters
                .iter()
                .cloned()
                .map(Finding::NonEnglishCharacters)
                .collect(),
            RuleCategory::DuplicateIdentifier => errors
                .duplicate_identifier
                .iter()
                .cloned()
                .map(Finding::DuplicateIdentifier)
                .collect(),
            RuleCategory::InvalidCountryOrLanguage => errors
                .invalid_country_or_language
                .iter()
                .cloned()
                .map(Finding::InvalidCountryOrLanguage)
                .collect(),
            RuleCategory::InvalidAgeRating => errors
                .invalid_age_rating
                .iter()
                .cloned()
                .map(Finding::InvalidAgeRating)
                .collect(),
            RuleCategory::InvalidDateFormat => errors
                .invalid_date_format
                .iter()
                .cloned()
                .map(Finding::InvalidDateFormat)
                .collect(),
            RuleCategory::InvalidImpactValue => errors
                .invalid_impact_value
                .iter()
                .cloned()
                .map(Finding::InvalidImpactValue)
                .collect(),
        }
    }

    /// Number of findings in one category.
    pub fn count(&self, category: RuleCategory) -> usize {
        let errors = &self.errors;
        match category {
            RuleCategory::BlankCells => errors.blank_cells.len(),
            RuleCategory::NonEnglishCharacters => errors.non_english_characters.len(),
            RuleCategory::DuplicateIdentifier => errors.duplicate_identifier.len(),
            RuleCategory::InvalidCountryOrLanguage => errors.invalid_country_or_language.len(),
            RuleCategory::InvalidAgeRating => errors.invalid_age_rating.len(),
            RuleCategory::InvalidDateFormat => errors.invalid_date_format.len(),
            RuleCategory::InvalidImpactValue => errors.invalid_impact_value.len(),
        }
    }

    /// Finding counts for every category, in report order.
    pub fn counts(&self) -> IndexMap<RuleCategory, usize> {
        RuleCategory::ALL
            .iter()
            .map(|&c| (c, self.count(c)))
            .collect()
    }

    /// Total number of findings.
    pub fn total_findings(&self) -> usize {
        RuleCategory::ALL.iter().map(|&c| self.count(c)).sum()
    }

    /// True when no rule found anything.
    pub fn is_clean(&self) -> bool {
        self.total_findings() == 0
    }

    /// Row numbers with at least one finding.
    pub fn rows_with_findings(&self) -> BTreeSet<usize> {
        RuleCategory::ALL
            .iter()
            .flat_map(|&c| self.findings(c))
            .flat_map(|f| f.rows())
            .collect()
    }

    /// The simpler report shape: row number to its messages.
    ///
    /// Messages for a row follow category order. A duplicate cluster adds
    /// its message to every member row.
    pub fn row_messages(&self) -> BTreeMap<usize, Vec<String>> {
        let mut by_row: BTreeMap<usize, Vec<String>> = BTreeMap::new();

        for category in RuleCategory::ALL {
            for finding in self.findings(category) {
                let messages = finding.messages();
                for row in finding.rows() {
                    by_row
                        .entry(row)
                        .or_default()
                        .extend(messages.iter().cloned());
                }
            }
        }

        by_row
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
