//! Validation rule engine for title metadata tables.

mod engine;
mod report;
mod rules;

pub use engine::RuleEngine;
pub use report::{
    BlankCells, DuplicateIdentifier, Finding, InvalidAgeRating, InvalidCountryOrLanguage,
    InvalidDateFormat, InvalidImpactValue, NonEnglishCharacters, Report, ReportErrors,
    RuleCategory,
};
pub use rules::{
    ALLOWED_AGE_RATINGS, ALLOWED_PUNCTUATION, AgeRatingRule, BlankValueRule,
    CountryLanguageRule, DuplicateIdentifierRule, IMPACT_VALUES, ImpactValueRule,
    NonEnglishRule, RatingDateRule, Rule, disallowed_characters, is_numeric_code,
    is_valid_age_rating, is_valid_impact_value, is_valid_rating_date,
};
