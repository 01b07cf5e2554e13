//! The theatre state engine.
//!
//! Owns the seat grid and income accumulators. Every mutation goes through
//! [`Theatre::sell`], which validates fully before touching any state.
//!
//! Structure:
//! - Construction: dimension validation, grid and possible income derivation
//! - Queries: grid rendering, statistics, per-seat lookups
//! - Sales: the only mutating operation

use tracing::{debug, info};

use crate::error::{Coordinate, Dimension, TheatreError};
use crate::pricing;
use crate::types::{
    Dimensions, MAX_DIMENSION, MIN_DIMENSION, SaleOutcome, SeatRef, SeatStatus, Statistics,
};

/// A single-screen theatre with a fixed seat grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Theatre {
    dims: Dimensions,
    /// `grid[row - 1][seat - 1]`, always `rows` x `seats_per_row`.
    grid: Vec<Vec<SeatStatus>>,
    current_income: u32,
    possible_income: u32,
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl Theatre {
    /// Create a theatre with every seat available.
    ///
    /// # Errors
    /// `InvalidDimension` if either value is outside `1..=9`. Rows are
    /// checked first.
    pub fn new(rows: i32, seats_per_row: i32) -> Result<Self, TheatreError> {
        let dims = Dimensions {
            rows: validate_dimension(Dimension::Rows, rows)?,
            seats_per_row: validate_dimension(Dimension::SeatsPerRow, seats_per_row)?,
        };

        let grid = vec![
            vec![SeatStatus::Available; usize::from(dims.seats_per_row)];
            usize::from(dims.rows)
        ];
        let possible_income = pricing::possible_income(dims);

        info!(
            rows = dims.rows,
            seats_per_row = dims.seats_per_row,
            possible_income,
            "theatre created"
        );

        Ok(Theatre {
            dims,
            grid,
            current_income: 0,
            possible_income,
        })
    }
}

/// Range-check one theatre dimension on its own.
pub fn validate_dimension(dimension: Dimension, value: i32) -> Result<u8, TheatreError> {
    u8::try_from(value)
        .ok()
        .filter(|v| (MIN_DIMENSION..=MAX_DIMENSION).contains(v))
        .ok_or(TheatreError::InvalidDimension {
            dimension,
            value,
            max: MAX_DIMENSION,
        })
}

fn validate_coordinate(coordinate: Coordinate, value: i32, max: u8) -> Result<u8, TheatreError> {
    u8::try_from(value)
        .ok()
        .filter(|v| (1..=max).contains(v))
        .ok_or(TheatreError::InvalidCoordinate {
            coordinate,
            value,
            max,
        })
}

// ============================================================================
// QUERIES
// ============================================================================

impl Theatre {
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Status of a 1-based seat, or `None` if it lies outside the theatre.
    pub fn seat_status(&self, row: u8, seat: u8) -> Option<SeatStatus> {
        let r = usize::from(row).checked_sub(1)?;
        let s = usize::from(seat).checked_sub(1)?;
        self.grid.get(r)?.get(s).copied()
    }

    /// Range-check a row number without selling anything.
    pub fn check_row(&self, row: i32) -> Result<u8, TheatreError> {
        validate_coordinate(Coordinate::Row, row, self.dims.rows)
    }

    /// Range-check a seat number without selling anything.
    pub fn check_seat(&self, seat: i32) -> Result<u8, TheatreError> {
        validate_coordinate(Coordinate::Seat, seat, self.dims.seats_per_row)
    }

    /// Price of any seat in a 1-based row, or `None` if the row does not exist.
    pub fn price_of_row(&self, row: u8) -> Option<u32> {
        (1..=self.dims.rows)
            .contains(&row)
            .then(|| pricing::seat_price(self.dims, row))
    }

    /// Render the seat map as rows of symbols.
    ///
    /// The first row is a header: a blank corner cell, then seat numbers.
    /// Each following row starts with its row number, then one symbol per
    /// seat (see [`SeatStatus::symbol`]).
    pub fn render_grid(&self) -> Vec<Vec<String>> {
        let header: Vec<String> = std::iter::once(" ".to_string())
            .chain((1..=self.dims.seats_per_row).map(|n| n.to_string()))
            .collect();

        let rows = self.grid.iter().enumerate().map(|(i, seats)| {
            std::iter::once((i + 1).to_string())
                .chain(seats.iter().map(|s| s.symbol().to_string()))
                .collect::<Vec<String>>()
        });

        std::iter::once(header).chain(rows).collect()
    }

    pub fn sold_count(&self) -> u32 {
        let sold = self
            .grid
            .iter()
            .flatten()
            .filter(|s| **s == SeatStatus::Sold)
            .count();
        // Bounded by 81 seats.
        sold as u32
    }

    pub fn statistics(&self) -> Statistics {
        let sold_count = self.sold_count();
        Statistics {
            sold_count,
            sold_percentage: 100.0 * f64::from(sold_count) / f64::from(self.dims.total()),
            current_income: self.current_income,
            possible_income: self.possible_income,
        }
    }
}

// ============================================================================
// SALES
// ============================================================================

impl Theatre {
    /// Sell a 1-based seat and return its price.
    ///
    /// Checks run in order: row range, seat range, availability. Nothing is
    /// modified unless all three pass.
    ///
    /// # Errors
    /// - `InvalidCoordinate` if `row` or `seat` is outside the theatre
    /// - `SeatAlreadySold` if the seat was sold before
    pub fn sell(&mut self, row: i32, seat: i32) -> Result<u32, TheatreError> {
        let result = self.try_sell(row, seat);
        match &result {
            Ok(price) => debug!(row, seat, price, "seat sold"),
            Err(e) => debug!(row, seat, error = %e, "sale rejected"),
        }
        result
    }

    fn try_sell(&mut self, row: i32, seat: i32) -> Result<u32, TheatreError> {
        let row = self.check_row(row)?;
        let seat = self.check_seat(seat)?;

        let status = &mut self.grid[usize::from(row - 1)][usize::from(seat - 1)];
        if *status == SeatStatus::Sold {
            return Err(TheatreError::SeatAlreadySold { row, seat });
        }

        let price = pricing::seat_price(self.dims, row);
        *status = SeatStatus::Sold;
        self.current_income += price;
        Ok(price)
    }

    /// Attempt every sale in order, carrying on past rejections.
    pub fn sell_all(&mut self, seats: &[SeatRef]) -> Vec<SaleOutcome> {
        seats
            .iter()
            .map(|&SeatRef { row, seat }| match self.sell(row, seat) {
                Ok(price) => SaleOutcome::Sold { row, seat, price },
                Err(e) => SaleOutcome::Rejected {
                    row,
                    seat,
                    reason: e.to_string(),
                },
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
