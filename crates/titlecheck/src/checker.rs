//! Main TitleChecker struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::validation::{Report, RuleCategory, RuleEngine};

/// Configuration for a validation run.
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// Result of validating a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Summary counts.
    pub summary: ValidationSummary,
    /// Findings grouped by rule category.
    pub report: Report,
}

/// Summary of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of data rows checked.
    pub rows_checked: usize,
    /// Number of rows with at least one finding.
    pub rows_with_findings: usize,
    /// Total number of findings.
    pub total_findings: usize,
    /// Findings per category, keyed like the report.
    pub findings_by_category: IndexMap<RuleCategory, usize>,
    /// True when nothing was found.
    pub is_clean: bool,
}

impl ValidationSummary {
    /// Summarize a report produced for `rows_checked` rows.
    pub fn from_report(report: &Report, rows_checked: usize) -> Self {
        Self {
            rows_checked,
            rows_with_findings: report.rows_with_findings().len(),
            total_findings: report.total_findings(),
            findings_by_category: report.counts(),
            is_clean: report.is_clean(),
        }
    }
}

/// Loads title metadata files and validates them.
#[derive(Default)]
pub struct TitleChecker {
    parser: Parser,
    engine: RuleEngine,
}

impl TitleChecker {
    /// Create a checker with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checker with custom configuration.
    pub fn with_config(config: CheckerConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            engine: RuleEngine::new(),
        }
    }

    /// Validate an already-loaded table.
    pub fn validate_table(&self, table: &DataTable) -> Result<Report> {
        self.engine.validate(table)
    }

    /// Load a `.csv`, `.tsv`, `.txt` or `.xlsx` file and validate it.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<ValidationResult> {
        let (table, source) = self.parser.parse_file(path)?;
        self.finish(table, source)
    }

    /// Validate an uploaded file held in memory; the name picks the format.
    pub fn validate_upload(&self, file_name: &str, contents: &[u8]) -> Result<ValidationResult> {
        let (table, source) = self.parser.parse_upload(file_name, contents)?;
        self.finish(table, source)
    }

    fn finish(&self, table: DataTable, source: SourceMetadata) -> Result<ValidationResult> {
        let report = self.validate_table(&table)?;
        let summary = ValidationSummary::from_report(&report, table.row_count());

        info!(
            file = %source.file,
            rows = summary.rows_checked,
            findings = summary.total_findings,
            "validation finished"
        );

        Ok(ValidationResult {
            source,
            summary,
            report,
        })
    }
}

/// Validate a table with the standard rule set.
pub fn validate(table: &DataTable) -> Result<Report> {
    RuleEngine::new().validate(table)
}
