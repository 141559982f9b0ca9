//! Runs the fixed rule set over a table.

use tracing::{debug, trace};

use crate::error::Result;
use crate::input::DataTable;
use crate::schema::BoundColumns;

use super::report::Report;
use super::rules::{
    AgeRatingRule, BlankValueRule, CountryLanguageRule, DuplicateIdentifierRule,
    ImpactValueRule, NonEnglishRule, RatingDateRule, Rule,
};

/// Orchestrates the validation rules.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create an engine with the full rule set, in report order.
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(BlankValueRule),
                Box::new(NonEnglishRule),
                Box::new(DuplicateIdentifierRule),
                Box::new(CountryLanguageRule),
                Box::new(AgeRatingRule),
                Box::new(RatingDateRule),
                Box::new(ImpactValueRule),
            ],
        }
    }

    /// Check the schema, then run every rule over every row.
    ///
    /// Fails only when required columns are missing; in that case no rule
    /// runs. Data problems are always returned as findings.
    pub fn validate(&self, table: &DataTable) -> Result<Report> {
        let columns = BoundColumns::bind(&table.headers)?;
        Ok(self.run(table, &columns))
    }

    /// Run every rule against a table whose columns are already bound.
    pub fn run(&self, table: &DataTable, columns: &BoundColumns) -> Report {
        let mut report = Report::new();

        for rule in &self.rules {
            let findings = rule.check(table, columns);
            debug!(
                rule = rule.category().key(),
                findings = findings.len(),
                "rule finished"
            );
            for finding in &findings {
                trace!(rule = rule.category().key(), rows = ?finding.rows(), "finding");
            }
            report.extend(findings);
        }

        report
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
