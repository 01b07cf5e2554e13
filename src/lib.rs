//! cinema: seat map, ticket sales and statistics for a single-screen theatre.

pub mod error;
pub mod menu;
pub mod pricing;
pub mod report;
pub mod theatre;
pub mod tui;
pub mod types;
