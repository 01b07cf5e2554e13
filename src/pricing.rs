//! Ticket pricing.
//!
//! Pure functions: no state, easily testable.

use crate::types::Dimensions;

/// Theatres with fewer seats than this charge a flat price.
pub const LARGE_THEATRE_SEATS: u32 = 60;

/// Price of every seat in a small theatre, and of front-half seats in a large one.
pub const FRONT_PRICE: u32 = 10;

/// Price of back-half seats in a large theatre.
pub const BACK_PRICE: u32 = 8;

/// Number of rows priced at `FRONT_PRICE` in a large theatre.
///
/// The front half rounds down, so an odd middle row belongs to the back.
pub fn front_half_rows(dims: Dimensions) -> u8 {
    dims.rows / 2
}

/// Price of any seat in `row` (1-based).
///
/// Depends only on the row, never on the seat within it. Callers are
/// expected to have range-checked `row`.
pub fn seat_price(dims: Dimensions, row: u8) -> u32 {
    if dims.total() < LARGE_THEATRE_SEATS || row <= front_half_rows(dims) {
        FRONT_PRICE
    } else {
        BACK_PRICE
    }
}

/// Income if every seat in the theatre were sold.
pub fn possible_income(dims: Dimensions) -> u32 {
    let seats = u32::from(dims.seats_per_row);
    (1..=dims.rows).map(|row| seat_price(dims, row) * seats).sum()
}
