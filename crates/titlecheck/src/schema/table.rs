//! Binding the required columns to positions in a loaded table.

use tracing::debug;

use super::column::{
    AGE_RATING_COLUMN, COLUMNS, COUNTRIES_COLUMN, ColumnSpec, IDENTIFIER_COLUMN,
    LANGUAGES_COLUMN, RATING_DATE_COLUMN,
};
use super::types::ColumnKind;
use crate::error::{Result, TitleCheckError};

/// A required column located in a table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundColumn {
    pub spec: &'static ColumnSpec,
    /// Zero-based position in the table.
    pub position: usize,
}

impl BoundColumn {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.spec.kind
    }
}

/// The required columns resolved against a header, validated once per run.
#[derive(Debug, Clone)]
pub struct BoundColumns {
    pub identifier: BoundColumn,
    pub countries: BoundColumn,
    pub languages: BoundColumn,
    pub age_rating: BoundColumn,
    pub rating_date: BoundColumn,
    columns: Vec<BoundColumn>,
}

impl BoundColumns {
    /// Resolve every required column, or fail naming all missing ones.
    pub fn bind(headers: &[String]) -> Result<Self> {
        let mut columns = Vec::with_capacity(COLUMNS.len());
        let mut missing_columns = Vec::new();

        for spec in COLUMNS {
            match headers.iter().position(|h| h == spec.name) {
                Some(position) => columns.push(BoundColumn { spec, position }),
                None => missing_columns.push(spec.name.to_string()),
            }
        }

        if !missing_columns.is_empty() {
            debug!(missing = ?missing_columns, "schema check failed");
            return Err(TitleCheckError::Schema { missing_columns });
        }

        let find = |name: &str| {
            columns
                .iter()
                .find(|c| c.name() == name)
                .copied()
                .ok_or_else(|| TitleCheckError::Schema {
                    missing_columns: vec![name.to_string()],
                })
        };

        Ok(Self {
            identifier: find(IDENTIFIER_COLUMN)?,
            countries: find(COUNTRIES_COLUMN)?,
            languages: find(LANGUAGES_COLUMN)?,
            age_rating: find(AGE_RATING_COLUMN)?,
            rating_date: find(RATING_DATE_COLUMN)?,
            columns,
        })
    }

    /// All required columns in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundColumn> {
        self.columns.iter()
    }

    /// Required columns of one kind, in schema order.
    pub fn of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &BoundColumn> {
        self.columns.iter().filter(move |c| c.kind() == kind)
    }

    /// Free-text columns checked for non-English characters.
    pub fn free_text(&self) -> impl Iterator<Item = &BoundColumn> {
        self.columns.iter().filter(|c| c.kind().is_free_text())
    }
}
