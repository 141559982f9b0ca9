//! titlecheck: data-quality rules for media title metadata sheets.
//!
//! A sheet holds one row per title. Every row is checked against a fixed
//! rule set (blank values, non-English text, duplicate GTIs, numeric
//! country/language codes, age ratings, rating dates and impact levels),
//! and the findings come back grouped by rule category.
//!
//! # Core Principles
//!
//! - **Fixed rules**: the schema and rule set are compiled in
//! - **Complete reports**: a bad row never stops the run; every finding is reported
//! - **No coercion**: cells are compared as the text the user entered
//!
//! # Example
//!
//! ```no_run
//! use titlecheck::TitleChecker;
//!
//! let checker = TitleChecker::new();
//! let result = checker.validate_file("titles.xlsx").unwrap();
//!
//! println!("Rows: {}", result.summary.rows_checked);
//! println!("Findings: {}", result.summary.total_findings);
//! println!("{}", result.report.to_json_pretty().unwrap());
//! ```

pub mod error;
pub mod input;
pub mod schema;
pub mod validation;

mod checker;

pub use crate::checker::{
    CheckerConfig, TitleChecker, ValidationResult, ValidationSummary, validate,
};
pub use error::{InputError, Result, TitleCheckError};
pub use input::{DataTable, FileFormat, Parser, ParserConfig, Row, SourceMetadata};
pub use schema::{BoundColumns, COLUMNS, ColumnKind, ColumnSpec};
pub use validation::{Finding, Report, ReportErrors, RuleCategory, RuleEngine};
