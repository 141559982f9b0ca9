//! The required columns of a title metadata sheet.

use serde::Serialize;

use super::types::ColumnKind;

pub const IDENTIFIER_COLUMN: &str = "GTI";
pub const COUNTRIES_COLUMN: &str = "Countries";
pub const LANGUAGES_COLUMN: &str = "Languages";
pub const AGE_RATING_COLUMN: &str = "Age Rating ID";
pub const RATING_DATE_COLUMN: &str = "Rating Date";

/// A required column and the kind of content it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn spec(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

/// Every required column, in the order reports list them.
pub const COLUMNS: &[ColumnSpec] = &[
    spec(IDENTIFIER_COLUMN, ColumnKind::Identifier),
    spec("Entity", ColumnKind::Plain),
    spec("Title Name", ColumnKind::FreeText),
    spec("Other title names", ColumnKind::OptionalText),
    spec("Duration", ColumnKind::Plain),
    spec("Producers", ColumnKind::FreeText),
    spec("Directors", ColumnKind::FreeText),
    spec("Production Company Name", ColumnKind::FreeText),
    spec("Year of Production", ColumnKind::Plain),
    spec(COUNTRIES_COLUMN, ColumnKind::NumericCode),
    spec(LANGUAGES_COLUMN, ColumnKind::NumericCode),
    spec("Is Version Original", ColumnKind::Plain),
    spec(AGE_RATING_COLUMN, ColumnKind::AgeRating),
    spec("Content Descriptors", ColumnKind::Plain),
    spec("Violence Impact", ColumnKind::Impact),
    spec("Drug Use Impact", ColumnKind::Impact),
    spec("Themes Impact", ColumnKind::Impact),
    spec("Language Impact", ColumnKind::Impact),
    spec("Nudity Impact", ColumnKind::Impact),
    spec("Sex Impact", ColumnKind::Impact),
    spec("ACB Rated", ColumnKind::Plain),
    spec("Different Version Production Exists", ColumnKind::Plain),
    spec(RATING_DATE_COLUMN, ColumnKind::RatingDate),
];

/// Kind of a required column, `None` for columns outside the schema.
pub fn column_kind(name: &str) -> Option<ColumnKind> {
    COLUMNS.iter().find(|c| c.name == name).map(|c| c.kind)
}
