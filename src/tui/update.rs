//! Pure state transitions: (Screen, Action) → Transition.
//!
//! Fully testable without a terminal. The theatre is read-only here;
//! selling is requested through `Effect::Sell` and applied by `run`.

use crate::theatre::Theatre;
use crate::types::SeatStatus;

use super::state::{Action, Effect, Notice, SeatCursor, Screen, Transition};

/// Pure state transition function.
pub fn update(screen: Screen, action: &Action, theatre: &Theatre) -> Transition {
    match screen {
        Screen::SeatMap { cursor, notice } => update_seat_map(cursor, notice, action, theatre),
        Screen::Confirm { cursor, price } => update_confirm(cursor, price, action),
        Screen::Statistics { cursor } => update_statistics(cursor, action),
    }
}

/// Apply the outcome of a sale to the screen it was requested from.
///
/// Called by the effects layer after `Theatre::sell` returns.
pub fn after_sale(cursor: SeatCursor, outcome: Result<u32, String>) -> Screen {
    let notice = match outcome {
        Ok(price) => Notice::Sold {
            row: cursor.row,
            seat: cursor.seat,
            price,
        },
        Err(reason) => Notice::Rejected(reason),
    };
    Screen::SeatMap {
        cursor,
        notice: Some(notice),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// SeatMap: cursor movement, buy, statistics.
fn update_seat_map(
    cursor: SeatCursor,
    notice: Option<Notice>,
    action: &Action,
    theatre: &Theatre,
) -> Transition {
    let dims = theatre.dimensions();

    match action {
        Action::MoveUp => Transition::Screen(Screen::seat_map(SeatCursor {
            row: cursor.row.saturating_sub(1).max(1),
            ..cursor
        })),
        Action::MoveDown => Transition::Screen(Screen::seat_map(SeatCursor {
            row: (cursor.row + 1).min(dims.rows),
            ..cursor
        })),
        Action::MoveLeft => Transition::Screen(Screen::seat_map(SeatCursor {
            seat: cursor.seat.saturating_sub(1).max(1),
            ..cursor
        })),
        Action::MoveRight => Transition::Screen(Screen::seat_map(SeatCursor {
            seat: (cursor.seat + 1).min(dims.seats_per_row),
            ..cursor
        })),
        Action::Enter => match theatre.seat_status(cursor.row, cursor.seat) {
            Some(SeatStatus::Available) => match theatre.price_of_row(cursor.row) {
                Some(price) => Transition::Screen(Screen::Confirm { cursor, price }),
                None => Transition::Screen(Screen::SeatMap { cursor, notice }),
            },
            Some(SeatStatus::Sold) => Transition::Screen(Screen::SeatMap {
                cursor,
                notice: Some(Notice::Rejected("Seat already sold".to_string())),
            }),
            None => Transition::Screen(Screen::SeatMap { cursor, notice }),
        },
        Action::ShowStatistics => Transition::Screen(Screen::Statistics { cursor }),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::SeatMap { cursor, notice }),
    }
}

/// Confirm: Y sells, N or Esc goes back.
fn update_confirm(cursor: SeatCursor, price: u32, action: &Action) -> Transition {
    match action {
        Action::ConfirmYes => Transition::Effect(Effect::Sell { cursor }),
        Action::ConfirmNo | Action::Back => Transition::Screen(Screen::seat_map(cursor)),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Confirm { cursor, price }),
    }
}

/// Statistics: any way back returns to the seat map.
fn update_statistics(cursor: SeatCursor, action: &Action) -> Transition {
    match action {
        Action::Back | Action::Enter | Action::ShowStatistics => {
            Transition::Screen(Screen::seat_map(cursor))
        }
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Statistics { cursor }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
