//! Validate command - check a metadata file and print the findings.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use titlecheck::{
    CheckerConfig, ParserConfig, RuleCategory, TitleCheckError, TitleChecker, ValidationResult,
};
use tracing::debug;

/// Exit status for `--strict` runs that found problems.
const FINDINGS_EXIT_CODE: u8 = 2;

/// Options for one `validate` run.
pub struct ValidateArgs {
    pub file: Option<PathBuf>,
    pub json: bool,
    pub by_row: bool,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub delimiter: Option<u8>,
}

pub fn run(args: ValidateArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let file = match args.file {
        Some(file) => file,
        None => prompt_for_path()?,
    };

    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let checker = TitleChecker::with_config(CheckerConfig {
        parser: ParserConfig {
            delimiter: args.delimiter,
            ..Default::default()
        },
    });

    let result = match checker.validate_file(&file) {
        Ok(result) => result,
        Err(TitleCheckError::Schema { missing_columns }) => {
            if args.json {
                let body = serde_json::json!({ "missing_columns": &missing_columns });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                eprintln!("{}", "Missing columns in the input file:".red().bold());
                for column in &missing_columns {
                    eprintln!("  - {}", column);
                }
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(ref path) = args.output {
        fs::write(path, serde_json::to_string_pretty(&result)?)?;
        debug!(path = %path.display(), "wrote result");
    }

    if args.json {
        println!("{}", result.report.to_json_pretty()?);
    } else if args.by_row {
        let messages = result.report.row_messages();
        println!("{}", serde_json::to_string_pretty(&messages)?);
    } else {
        print_summary(&result);
    }

    if let Some(path) = args.output.filter(|_| !args.json) {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    if args.strict && !result.summary.is_clean {
        return Ok(ExitCode::from(FINDINGS_EXIT_CODE));
    }
    Ok(ExitCode::SUCCESS)
}

/// Ask for a path on stdin.
fn prompt_for_path() -> io::Result<PathBuf> {
    print!("Enter the path to the metadata file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let path = line.trim().trim_matches(|c| c == '"' || c == '\'');
    if path.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no file path given"));
    }
    Ok(PathBuf::from(path))
}

fn print_summary(result: &ValidationResult) {
    println!(
        "{} {}",
        "Validated".cyan().bold(),
        result.source.file.white()
    );
    println!(
        "  {} rows, {} columns ({})",
        result.source.row_count, result.source.column_count, result.source.format
    );
    println!();

    if result.summary.is_clean {
        println!("{}", "No issues found - file looks clean!".green());
        return;
    }

    println!(
        "Found {} findings in {} of {} rows",
        result.summary.total_findings.to_string().white().bold(),
        result.summary.rows_with_findings.to_string().red(),
        result.summary.rows_checked
    );
    println!();

    for category in RuleCategory::ALL {
        let count = result.report.count(category);
        if count == 0 {
            continue;
        }
        println!("{} ({})", category.label().yellow().bold(), count);
        for finding in result.report.findings(category) {
            let rows: Vec<String> = finding.rows().iter().map(|r| r.to_string()).collect();
            for message in finding.messages() {
                println!("  {} {}", format!("row {}:", rows.join(", ")).dimmed(), message);
            }
        }
        println!();
    }

    println!(
        "Run with {} for the full report",
        "--json".cyan().bold()
    );
}
