//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// titlecheck: data-quality checks for title metadata sheets
#[derive(Parser)]
#[command(name = "titlecheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a metadata file (.csv, .tsv, .txt, .xlsx)
    Validate {
        /// Path to the data file (prompted for when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long, conflicts_with = "by_row")]
        json: bool,

        /// Print findings grouped by row
        #[arg(long)]
        by_row: bool,

        /// Write the full result (source, summary, report) as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with status 2 when any finding exists
        #[arg(long)]
        strict: bool,

        /// Field delimiter for text files (auto-detected by default)
        #[arg(short, long, value_parser = parse_delimiter)]
        delimiter: Option<u8>,
    },

    /// List the required columns
    Columns {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the upload web service
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Maximum upload size in megabytes
        #[arg(long, default_value = "16")]
        max_upload_mb: usize,
    },
}

/// Accept a single ASCII character, or `\t` / `tab`.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!(
            "Invalid delimiter: {}. Use a single ASCII character or 'tab'.",
            s
        )),
    }
}
