//! Report formatting for seat maps, statistics and batch sales.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::{OutputFormat, SaleOutcome, SalesReport, Statistics};

/// Format a rendered grid (see [`crate::theatre::Theatre::render_grid`]).
///
/// Always human-readable; the grid is a picture, not data.
pub fn format_grid(grid: &[Vec<String>]) -> String {
    let mut out = String::from("Cinema:\n");
    for row in grid {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Format a statistics snapshot for output.
pub fn format_statistics(stats: &Statistics, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_statistics_human(stats),
        OutputFormat::Json => format_json(stats),
    }
}

/// Format the outcome of a batch of sales for output.
pub fn format_sales(report: &SalesReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_sales_human(report),
        OutputFormat::Json => format_json(report),
    }
}

/// One line describing a single sale attempt.
pub fn format_outcome(outcome: &SaleOutcome) -> String {
    match outcome {
        SaleOutcome::Sold { row, seat, price } => {
            format!("Row {}, seat {}: sold for ${}", row, seat, price)
        }
        SaleOutcome::Rejected { row, seat, reason } => {
            format!("Row {}, seat {}: rejected ({})", row, seat, reason)
        }
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_statistics_human(stats: &Statistics) -> String {
    let mut out = String::new();
    out.push_str(&format!("Number of purchased tickets: {}\n", stats.sold_count));
    out.push_str(&format!("Percentage: {:.2}%\n", stats.sold_percentage));
    out.push_str(&format!("Current income: ${}\n", stats.current_income));
    out.push_str(&format!("Total income: ${}\n", stats.possible_income));
    out
}

fn format_sales_human(report: &SalesReport) -> String {
    let mut out = String::new();

    if !report.sales.is_empty() {
        out.push_str("=== Sales ===\n");
        for outcome in &report.sales {
            out.push_str(&format!("  {}\n", format_outcome(outcome)));
        }
        out.push('\n');
    }

    let rejected = report
        .sales
        .iter()
        .filter(|o| matches!(o, SaleOutcome::Rejected { .. }))
        .count();

    out.push_str("=== Statistics ===\n");
    out.push_str(&format!(
        "Theatre:  {} rows x {} seats\n",
        report.dimensions.rows, report.dimensions.seats_per_row
    ));
    if rejected > 0 {
        out.push_str(&format!("Rejected: {}\n", rejected));
    }
    out.push_str(&format_statistics_human(&report.statistics));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json<T: Serialize>(value: &T) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Our types have no maps with non-string keys, so this cannot fail
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theatre::Theatre;
    use crate::types::Dimensions;

    fn sample_report() -> SalesReport {
        SalesReport {
            dimensions: Dimensions { rows: 4, seats_per_row: 4 },
            sales: vec![
                SaleOutcome::Sold { row: 1, seat: 1, price: 10 },
                SaleOutcome::Rejected {
                    row: 1,
                    seat: 1,
                    reason: "seat 1 in row 1 has already been purchased".to_string(),
                },
            ],
            statistics: Statistics {
                sold_count: 1,
                sold_percentage: 6.25,
                current_income: 10,
                possible_income: 160,
            },
        }
    }

    // --- Grid ---

    #[test]
    fn grid_has_title_and_rows() {
        let mut theatre = Theatre::new(2, 2).unwrap();
        theatre.sell(1, 2).unwrap();
        let output = format_grid(&theatre.render_grid());
        assert_eq!(output, "Cinema:\n  1 2\n1 S B\n2 S S\n");
    }

    // --- Human format tests ---

    #[test]
    fn human_statistics_formats_percentage_with_two_decimals() {
        let output = format_statistics(&sample_report().statistics, OutputFormat::Human);

        assert!(output.contains("Number of purchased tickets: 1"));
        assert!(output.contains("Percentage: 6.25%"));
        assert!(output.contains("Current income: $10"));
        assert!(output.contains("Total income: $160"));
    }

    #[test]
    fn human_statistics_for_empty_theatre() {
        let theatre = Theatre::new(3, 3).unwrap();
        let output = format_statistics(&theatre.statistics(), OutputFormat::Human);
        assert!(output.contains("Percentage: 0.00%"));
        assert!(output.contains("Total income: $90"));
    }

    #[test]
    fn human_sales_lists_every_outcome() {
        let output = format_sales(&sample_report(), OutputFormat::Human);

        assert!(output.contains("=== Sales ==="));
        assert!(output.contains("Row 1, seat 1: sold for $10"));
        assert!(output.contains("rejected (seat 1 in row 1 has already been purchased)"));
        assert!(output.contains("Rejected: 1"));
        assert!(output.contains("4 rows x 4 seats"));
    }

    #[test]
    fn human_sales_without_attempts_shows_only_statistics() {
        let mut report = sample_report();
        report.sales.clear();
        let output = format_sales(&report, OutputFormat::Human);

        assert!(!output.contains("=== Sales ==="));
        assert!(!output.contains("Rejected:"));
        assert!(output.contains("=== Statistics ==="));
    }

    // --- JSON format tests ---

    #[test]
    fn json_statistics_has_expected_fields() {
        let output = format_statistics(&sample_report().statistics, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

        assert_eq!(parsed["sold_count"], 1);
        assert_eq!(parsed["sold_percentage"], 6.25);
        assert_eq!(parsed["current_income"], 10);
        assert_eq!(parsed["possible_income"], 160);
    }

    #[test]
    fn json_sales_is_valid_json() {
        let output = format_sales(&sample_report(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["dimensions"]["rows"], 4);
        assert_eq!(parsed["sales"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["sales"][0]["outcome"], "sold");
        assert_eq!(parsed["sales"][1]["outcome"], "rejected");
        assert!(parsed["statistics"].is_object());
    }
}
