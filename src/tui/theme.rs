//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: available seat, successful sale
//! - Red: sold seat, rejected sale
//! - Cyan: interactive elements (keybinding hints, prices)
//! - Dim: de-emphasized (headers, legends)
//! - Bold: important (counts, totals)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Seat can be bought / sale succeeded: green.
pub const STYLE_AVAILABLE: Style = Style::new().fg(Color::Green);

/// Seat is taken / sale refused: red.
pub const STYLE_SOLD: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold white.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Seat under the cursor.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);
