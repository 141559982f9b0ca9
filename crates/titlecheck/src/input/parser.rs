//! Loaders for delimited-text and spreadsheet files.
//!
//! Every cell comes out as text or absent. Nothing is coerced to a number
//! or a date, so the rule engine sees what the user typed.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::InputError;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Supported input file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Comma-separated text (delimiter still auto-detected).
    Csv,
    /// Tab-separated text.
    Tsv,
    /// Delimited text with an auto-detected delimiter.
    Txt,
    /// Excel workbook; the first worksheet is read.
    Xlsx,
}

impl FileFormat {
    /// Extensions accepted by [`FileFormat::from_extension`].
    pub const EXTENSIONS: &'static [&'static str] = &["csv", "tsv", "txt", "xlsx"];

    /// Match a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "tsv" => Some(FileFormat::Tsv),
            "txt" => Some(FileFormat::Txt),
            "xlsx" => Some(FileFormat::Xlsx),
            _ => None,
        }
    }

    /// Determine the format from a path or file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&ext).ok_or_else(|| {
            InputError::UnsupportedFormat(format!(
                "'{}' (supported: {})",
                path.display(),
                Self::EXTENSIONS.join(", ")
            ))
        })
    }
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use for text formats (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character for text formats.
    pub quote: u8,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Parses tabular data files into a [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read and parse a file, choosing the loader from its extension.
    pub fn parse_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(DataTable, SourceMetadata), InputError> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;

        let contents = fs::read(path).map_err(|e| InputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.parse_source(path.to_path_buf(), &contents, format)
    }

    /// Parse an in-memory upload, choosing the loader from its file name.
    pub fn parse_upload(
        &self,
        file_name: &str,
        contents: &[u8],
    ) -> Result<(DataTable, SourceMetadata), InputError> {
        let format = FileFormat::from_path(file_name)?;
        self.parse_source(PathBuf::from(file_name), contents, format)
    }

    fn parse_source(
        &self,
        path: PathBuf,
        contents: &[u8],
        format: FileFormat,
    ) -> Result<(DataTable, SourceMetadata), InputError> {
        let mut hasher = Sha256::new();
        hasher.update(contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let (table, label) = self.parse_bytes(contents, format)?;
        debug!(
            path = %path.display(),
            format = label,
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );

        let metadata = SourceMetadata::new(
            path,
            hash,
            contents.len() as u64,
            label.to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse bytes in the given format, returning the table and a format label.
    pub fn parse_bytes(
        &self,
        bytes: &[u8],
        format: FileFormat,
    ) -> Result<(DataTable, &'static str), InputError> {
        if format == FileFormat::Xlsx {
            return Ok((self.parse_xlsx(bytes)?, "xlsx"));
        }

        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let delimiter = match (self.config.delimiter, format) {
            (Some(d), _) => d,
            (None, FileFormat::Tsv) => b'\t',
            (None, _) => detect_delimiter(bytes)?,
        };

        let label = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        };

        Ok((self.parse_delimited(bytes, delimiter)?, label))
    }

    fn parse_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        // Invalid UTF-8 is replaced rather than rejected; the replacement
        // character is later reported as a non-English character.
        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(InputError::EmptyData("No header row found".to_string()));
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.byte_records().enumerate() {
            if self.config.max_rows.is_some_and(|max| row_idx >= max) {
                break;
            }

            let record = result?;
            rows.push(
                record
                    .iter()
                    .map(|field| Some(String::from_utf8_lossy(field).into_owned()))
                    .collect(),
            );
        }

        Ok(DataTable::new(headers, rows))
    }

    fn parse_xlsx(&self, bytes: &[u8]) -> Result<DataTable, InputError> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(bytes)).map_err(calamine::Error::Xlsx)?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| InputError::EmptyData("Workbook has no worksheets".to_string()))?
            .map_err(calamine::Error::Xlsx)?;

        let mut sheet_rows = range.rows();
        let headers: Vec<String> = match sheet_rows.next() {
            Some(cells) => cells
                .iter()
                .map(|c| cell_text(c).map(|s| s.trim().to_string()).unwrap_or_default())
                .collect(),
            None => Vec::new(),
        };

        if headers.iter().all(String::is_empty) {
            return Err(InputError::EmptyData("No header row found".to_string()));
        }

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let rows = sheet_rows
            .take(limit)
            .map(|cells| cells.iter().map(cell_text).collect())
            .collect();

        Ok(DataTable::new(headers, rows))
    }
}

/// Render a spreadsheet cell the way it reads in the sheet.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(float_text(*f)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => Some(match dt.as_datetime() {
            Some(datetime) => datetime.format("%m/%d/%Y").to_string(),
            None => float_text(dt.as_f64()),
        }),
        Data::Error(e) => Some(e.to_string()),
    }
}

/// Whole floats render without a fractional part, so an ID typed as `2`
/// and stored as `2.0` reads back as `2`.
fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8, InputError> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    if lines.is_empty() {
        return Err(InputError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines win; tabs break ties since they
        // rarely appear inside title metadata.
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
