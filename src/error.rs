//! Error types for theatre operations.
//!
//! Every variant is a caller-input problem. None leave the theatre in a
//! partially updated state.

use std::fmt;

use thiserror::Error;

/// Which theatre dimension failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Rows,
    SeatsPerRow,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Rows => f.write_str("number of rows"),
            Dimension::SeatsPerRow => f.write_str("number of seats in each row"),
        }
    }
}

/// Which seat coordinate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Row,
    Seat,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Row => f.write_str("row number"),
            Coordinate::Seat => f.write_str("seat number"),
        }
    }
}

/// Failure of a theatre operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheatreError {
    /// A dimension given at construction is outside `1..=max`.
    #[error("{dimension} must be in range 1 to {max}, got {value}")]
    InvalidDimension {
        dimension: Dimension,
        value: i32,
        max: u8,
    },

    /// A row or seat given to `sell` is outside the theatre.
    #[error("{coordinate} must be in range 1 to {max}, got {value}")]
    InvalidCoordinate {
        coordinate: Coordinate,
        value: i32,
        max: u8,
    },

    /// The seat exists but was sold earlier.
    #[error("seat {seat} in row {row} has already been purchased")]
    SeatAlreadySold { row: u8, seat: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_names_dimension_and_bound() {
        let err = TheatreError::InvalidDimension {
            dimension: Dimension::SeatsPerRow,
            value: 10,
            max: 9,
        };
        assert_eq!(
            err.to_string(),
            "number of seats in each row must be in range 1 to 9, got 10"
        );
    }

    #[test]
    fn invalid_coordinate_names_coordinate_and_bound() {
        let err = TheatreError::InvalidCoordinate {
            coordinate: Coordinate::Row,
            value: 0,
            max: 4,
        };
        assert_eq!(err.to_string(), "row number must be in range 1 to 4, got 0");
    }

    #[test]
    fn seat_already_sold_message() {
        let err = TheatreError::SeatAlreadySold { row: 2, seat: 3 };
        assert_eq!(err.to_string(), "seat 3 in row 2 has already been purchased");
    }
}
