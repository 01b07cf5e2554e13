//! TUI state algebra: pure types, zero effects.
//!
//! Screen variants carry only per-screen transient state (cursor, pending
//! price, last notice). The theatre itself lives in App and is mutated only
//! by the effects layer when it interprets `Effect::Sell`.

use crossterm::event::KeyEvent;

use crate::theatre::Theatre;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The terminal changed size; redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen: carries per-screen navigation state.
    pub screen: Screen,

    /// The theatre being sold from.
    pub theatre: Theatre,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// 1-based position of the highlighted seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatCursor {
    pub row: u8,
    pub seat: u8,
}

impl Default for SeatCursor {
    fn default() -> Self {
        SeatCursor { row: 1, seat: 1 }
    }
}

/// Feedback about the last purchase attempt, shown under the seat map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sold { row: u8, seat: u8, price: u32 },
    Rejected(String),
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Seat grid with a movable cursor.
    SeatMap {
        cursor: SeatCursor,
        notice: Option<Notice>,
    },

    /// Confirmation gate before a sale.
    Confirm { cursor: SeatCursor, price: u32 },

    /// Sales statistics. Remembers the cursor to return to.
    Statistics { cursor: SeatCursor },
}

/// Default screen is the seat map at the first seat.
impl Default for Screen {
    fn default() -> Self {
        Screen::seat_map(SeatCursor::default())
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Buy the seat under the cursor.
    Enter,
    ShowStatistics,
    ConfirmYes,
    ConfirmNo,
    Back,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Execute a side effect, then pick the next screen.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Sell the seat at `cursor`.
    Sell { cursor: SeatCursor },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the seat map.
    pub fn new(theatre: Theatre) -> Self {
        App {
            screen: Screen::default(),
            theatre,
            should_quit: false,
        }
    }
}

impl Screen {
    /// Seat map with no pending notice.
    pub fn seat_map(cursor: SeatCursor) -> Self {
        Screen::SeatMap {
            cursor,
            notice: None,
        }
    }

    /// Cursor position carried by any screen.
    pub fn cursor(&self) -> SeatCursor {
        match self {
            Screen::SeatMap { cursor, .. }
            | Screen::Confirm { cursor, .. }
            | Screen::Statistics { cursor } => *cursor,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
