//! Column kinds used to dispatch rules.

use serde::{Deserialize, Serialize};

/// What kind of content a required column holds.
///
/// Rules select the columns they check by kind, never by name lookups
/// scattered through the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// The title identifier (GTI); subject to duplicate detection.
    Identifier,
    /// Names and credits limited to English characters.
    FreeText,
    /// Free text that may be left blank ("Other title names").
    OptionalText,
    /// Numeric code list (countries, languages).
    NumericCode,
    /// Age rating identifier from a closed set.
    AgeRating,
    /// Content impact severity (`None`, `Low`, `Medium`, `High`).
    Impact,
    /// Rating date in `MM/DD/YYYY` form.
    RatingDate,
    /// Required but otherwise unchecked.
    Plain,
}

impl ColumnKind {
    /// Whether blank values in this column are allowed.
    pub fn allows_blank(&self) -> bool {
        matches!(self, ColumnKind::OptionalText)
    }

    /// Whether the column is checked for non-English characters.
    pub fn is_free_text(&self) -> bool {
        matches!(self, ColumnKind::FreeText | ColumnKind::OptionalText)
    }

    /// Get a human-readable label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Identifier => "identifier",
            ColumnKind::FreeText => "free text",
            ColumnKind::OptionalText => "optional free text",
            ColumnKind::NumericCode => "numeric string",
            ColumnKind::AgeRating => "enumerated (2, 9, 154, 147)",
            ColumnKind::Impact => "enumerated (None, Low, Medium, High)",
            ColumnKind::RatingDate => "date (MM/DD/YYYY)",
            ColumnKind::Plain => "required",
        }
    }
}
