//! Example: Validate a title metadata sheet.
//!
//! Usage:
//!   cargo run --example validate -- <file_path>
//!
//! Example:
//!   cargo run --example validate -- titles.xlsx

use std::env;
use std::path::Path;

use titlecheck::{RuleCategory, TitleCheckError, TitleChecker};

fn main() -> titlecheck::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example validate -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example validate -- titles.xlsx");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Title Check: {}", file_path);
    println!("{}", separator);
    println!();

    let result = match TitleChecker::new().validate_file(path) {
        Ok(result) => result,
        Err(TitleCheckError::Schema { missing_columns }) => {
            println!("Missing columns:");
            for column in &missing_columns {
                println!("  - {}", column);
            }
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    println!("## Source Metadata");
    println!("  File: {}", result.source.file);
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.source.row_count);
    println!("  Columns: {}", result.source.column_count);
    println!();

    println!("## Findings ({} total)", result.summary.total_findings);
    println!();
    for category in RuleCategory::ALL {
        println!("  {:30} {}", category.label(), result.report.count(category));
    }
    println!();

    if result.summary.is_clean {
        println!("No problems found.");
        return Ok(());
    }

    println!("## By Row");
    println!();
    for (row, messages) in result.report.row_messages() {
        println!("  Row {}", row);
        for message in messages {
            println!("    - {}", message);
        }
    }

    Ok(())
}
