//! The fixed column schema for title metadata and its binding to a table.

mod column;
mod table;
mod types;

pub use column::{
    AGE_RATING_COLUMN, COLUMNS, COUNTRIES_COLUMN, ColumnSpec, IDENTIFIER_COLUMN,
    LANGUAGES_COLUMN, RATING_DATE_COLUMN, column_kind,
};
pub use table::{BoundColumn, BoundColumns};
pub use types::ColumnKind;
