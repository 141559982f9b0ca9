//! Columns command - list the required columns.

use colored::Colorize;
use titlecheck::COLUMNS;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(COLUMNS)?);
        return Ok(());
    }

    println!(
        "{} ({} columns, in order)",
        "Required columns".cyan().bold(),
        COLUMNS.len()
    );
    println!();
    for (i, column) in COLUMNS.iter().enumerate() {
        let kind = if column.kind.allows_blank() {
            column.kind.label().dimmed()
        } else {
            column.kind.label().normal()
        };
        println!("  {:>2}. {:38} {}", i + 1, column.name, kind);
    }

    Ok(())
}
