//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use ingest_sdk::{BatchOutcome, ItemResult, Outcome, PRINT_OBJECT_NULL};
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Row for batch results table
#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Message")]
    message: String,
}

/// Print the per-item results of a batch operation
pub fn print_results(results: &[ItemResult], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(results)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if results.is_empty() {
                print_warning("The server returned no results");
                return Ok(());
            }

            let rows: Vec<ResultRow> = results
                .iter()
                .map(|r| ResultRow {
                    id: r.id().unwrap_or(PRINT_OBJECT_NULL).to_string(),
                    result: color_outcome(r.outcome()),
                    message: r.message().unwrap_or_default().to_string(),
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);

            let batch = BatchOutcome::new(results);
            if batch.all_succeeded() {
                print_success(&format!("{} items accepted", batch.total()));
            } else {
                print_warning(&format!(
                    "{} of {} items failed",
                    batch.failed(),
                    batch.total()
                ));
            }
        }
    }

    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Color an item outcome
pub fn color_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Success => outcome.as_str().green().to_string(),
        Outcome::Error => outcome.as_str().red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_outcome_keeps_wire_literal() {
        colored::control::set_override(false);
        assert_eq!(color_outcome(Outcome::Success), "success");
        assert_eq!(color_outcome(Outcome::Error), "error");
    }

    #[test]
    fn test_print_results_accepts_both_formats() {
        let results = vec![ItemResult::success("a"), ItemResult::error("b", "Error Y")];
        print_results(&results, OutputFormat::Json).unwrap();
        print_results(&results, OutputFormat::Table).unwrap();
        print_results(&[], OutputFormat::Table).unwrap();
    }
}
