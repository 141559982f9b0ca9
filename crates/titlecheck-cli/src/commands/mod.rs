//! CLI command implementations.

pub mod columns;
pub mod serve;
pub mod validate;
