//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{FileFormat, Parser, ParserConfig};
pub use source::{DataTable, HEADER_ROW_OFFSET, Row, SourceMetadata};
