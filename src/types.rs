//! Domain types for cinema.

use serde::Serialize;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Smallest allowed number of rows or seats per row.
pub const MIN_DIMENSION: u8 = 1;

/// Largest allowed number of rows or seats per row.
pub const MAX_DIMENSION: u8 = 9;

/// Validated theatre shape. Both fields lie in `MIN_DIMENSION..=MAX_DIMENSION`.
///
/// Only [`crate::theatre::Theatre::new`] produces these from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub rows: u8,
    pub seats_per_row: u8,
}

impl Dimensions {
    /// Total number of seats in the theatre.
    pub fn total(&self) -> u32 {
        u32::from(self.rows) * u32::from(self.seats_per_row)
    }
}

/// A (row, seat) pair as typed by a user. 1-based, unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatRef {
    pub row: i32,
    pub seat: i32,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Availability of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    #[default]
    Available,
    Sold,
}

impl SeatStatus {
    /// Grid symbol: `S` for an available seat, `B` for a bought one.
    pub fn symbol(self) -> char {
        match self {
            SeatStatus::Available => 'S',
            SeatStatus::Sold => 'B',
        }
    }
}

/// Result of one attempt in a batch of sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaleOutcome {
    /// Seat changed hands at this price.
    Sold { row: i32, seat: i32, price: u32 },
    /// Sale refused; the theatre is unchanged.
    Rejected { row: i32, seat: i32, reason: String },
}

// ============================================================================
// STRUCTS
// ============================================================================

/// Aggregate sales figures at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Seats currently sold.
    pub sold_count: u32,
    /// `100 * sold_count / total seats`, unrounded.
    pub sold_percentage: f64,
    /// Sum of the prices of sold seats.
    pub current_income: u32,
    /// Income if every seat were sold.
    pub possible_income: u32,
}

/// Every outcome of a batch run plus the statistics after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub dimensions: Dimensions,
    pub sales: Vec<SaleOutcome>,
    pub statistics: Statistics,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_symbols_are_distinct() {
        assert_eq!(SeatStatus::Available.symbol(), 'S');
        assert_eq!(SeatStatus::Sold.symbol(), 'B');
    }

    #[test]
    fn dimensions_total_multiplies() {
        let dims = Dimensions { rows: 9, seats_per_row: 9 };
        assert_eq!(dims.total(), 81);
    }

    #[test]
    fn sale_outcome_serializes_with_tag() {
        let sold = SaleOutcome::Sold { row: 1, seat: 2, price: 10 };
        let json = serde_json::to_value(&sold).unwrap();
        assert_eq!(json["outcome"], "sold");
        assert_eq!(json["price"], 10);

        let rejected = SaleOutcome::Rejected {
            row: 0,
            seat: 2,
            reason: "nope".into(),
        };
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["reason"], "nope");
    }
}
