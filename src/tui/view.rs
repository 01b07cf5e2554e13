//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::theatre::Theatre;
use crate::types::SeatStatus;

use super::state::{App, Notice, SeatCursor, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_help(&app.screen), chunks[2]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::SeatMap { cursor, notice } => {
            render_seat_map(&app.theatre, *cursor, notice.as_ref(), frame, content_area);
        }
        Screen::Confirm { cursor, price } => {
            render_confirm(*cursor, *price, frame, content_area);
        }
        Screen::Statistics { .. } => {
            render_statistics(&app.theatre, frame, content_area);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::SeatMap { .. } => "Cinema",
        Screen::Confirm { .. } => "Confirm Purchase",
        Screen::Statistics { .. } => "Statistics",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::SeatMap { .. } => "[arrows/hjkl] move  [Enter] buy  [s] statistics  [q] quit",
        Screen::Confirm { .. } => "[Y] yes, buy  [N] no, go back",
        Screen::Statistics { .. } => "[Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: SEAT MAP
// ============================================================================

fn render_seat_map(
    theatre: &Theatre,
    cursor: SeatCursor,
    notice: Option<&Notice>,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // grid
        Constraint::Length(4), // seat info + notice
    ])
    .split(area);

    frame.render_widget(Paragraph::new(seat_grid_lines(theatre, cursor)), chunks[0]);

    let mut info = vec![Line::from("")];
    let status = theatre.seat_status(cursor.row, cursor.seat);
    let price = theatre.price_of_row(cursor.row).unwrap_or_default();
    info.push(Line::from(vec![
        Span::raw(format!("  Row {}, seat {}: ", cursor.row, cursor.seat)),
        match status {
            Some(SeatStatus::Sold) => Span::styled("sold", theme::STYLE_SOLD),
            _ => Span::styled(format!("available for ${}", price), theme::STYLE_AVAILABLE),
        },
    ]));

    match notice {
        Some(Notice::Sold { row, seat, price }) => info.push(Line::from(Span::styled(
            format!("  ✓ Sold seat {} in row {}. Ticket price: ${}", seat, row, price),
            theme::STYLE_AVAILABLE,
        ))),
        Some(Notice::Rejected(reason)) => info.push(Line::from(Span::styled(
            format!("  ✗ {}", reason),
            theme::STYLE_SOLD,
        ))),
        None => {}
    }

    frame.render_widget(Paragraph::new(info).wrap(Wrap { trim: false }), chunks[1]);
}

/// Header of seat numbers, then one line per row with the cursor highlighted.
fn seat_grid_lines(theatre: &Theatre, cursor: SeatCursor) -> Vec<Line<'static>> {
    let dims = theatre.dimensions();

    let mut header = vec![Span::raw("    ")];
    for seat in 1..=dims.seats_per_row {
        header.push(Span::styled(format!("{} ", seat), theme::STYLE_DIM));
    }

    let mut lines = vec![Line::from(""), Line::from(header)];

    for row in 1..=dims.rows {
        let mut spans = vec![Span::styled(format!("  {} ", row), theme::STYLE_DIM)];
        for seat in 1..=dims.seats_per_row {
            let status = theatre.seat_status(row, seat).unwrap_or_default();
            let style = match status {
                SeatStatus::Available => theme::STYLE_AVAILABLE,
                SeatStatus::Sold => theme::STYLE_SOLD,
            };
            let style = if cursor == (SeatCursor { row, seat }) {
                style.patch(theme::STYLE_CURSOR)
            } else {
                style
            };
            spans.push(Span::styled(status.symbol().to_string(), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  S", theme::STYLE_AVAILABLE),
        Span::styled(" available   ", theme::STYLE_DIM),
        Span::styled("B", theme::STYLE_SOLD),
        Span::styled(" sold", theme::STYLE_DIM),
    ]));

    lines
}

// ============================================================================
// SCREEN: CONFIRM
// ============================================================================

fn render_confirm(cursor: SeatCursor, price: u32, frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Buy seat "),
            Span::styled(cursor.seat.to_string(), theme::STYLE_IMPORTANT),
            Span::raw(" in row "),
            Span::styled(cursor.row.to_string(), theme::STYLE_IMPORTANT),
            Span::raw(" for "),
            Span::styled(format!("${}", price), theme::STYLE_INTERACTIVE),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Sales are final: there are no refunds.",
            theme::STYLE_DIM,
        )),
    ];

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// SCREEN: STATISTICS
// ============================================================================

fn render_statistics(theatre: &Theatre, frame: &mut Frame, area: Rect) {
    let stats = theatre.statistics();
    let dims = theatre.dimensions();

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("  Sales", theme::STYLE_TITLE)),
        Line::from(Span::styled("  ═════", theme::STYLE_DIM)),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Purchased tickets: "),
            Span::styled(
                format!("{} of {}", stats.sold_count, dims.total()),
                theme::STYLE_IMPORTANT,
            ),
        ]),
        Line::from(vec![
            Span::raw("  Percentage:        "),
            Span::styled(format!("{:.2}%", stats.sold_percentage), theme::STYLE_IMPORTANT),
        ]),
        Line::from(vec![
            Span::raw("  Current income:    "),
            Span::styled(format!("${}", stats.current_income), theme::STYLE_AVAILABLE),
        ]),
        Line::from(vec![
            Span::raw("  Total income:      "),
            Span::styled(format!("${}", stats.possible_income), theme::STYLE_DIM),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(70, 24);
        Terminal::new(backend).unwrap()
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn app_with_sale() -> App {
        let mut theatre = Theatre::new(4, 4).unwrap();
        theatre.sell(1, 1).unwrap();
        App::new(theatre)
    }

    #[test]
    fn seat_map_shows_sold_and_available_symbols() {
        let content = screen_text(&app_with_sale());
        assert!(content.contains("1 2 3 4"), "Should show seat numbers");
        assert!(content.contains("B S S S"), "Row 1 should show the sale");
        assert!(content.contains("S S S S"), "Other rows are free");
    }

    #[test]
    fn seat_map_describes_cursor_seat() {
        let mut app = app_with_sale();
        app.screen = Screen::seat_map(SeatCursor { row: 2, seat: 3 });
        let content = screen_text(&app);
        assert!(content.contains("Row 2, seat 3: available for $10"));
    }

    #[test]
    fn seat_map_shows_notice() {
        let mut app = app_with_sale();
        app.screen = Screen::SeatMap {
            cursor: SeatCursor::default(),
            notice: Some(Notice::Sold { row: 1, seat: 1, price: 10 }),
        };
        let content = screen_text(&app);
        assert!(content.contains("Ticket price: $10"));
    }

    #[test]
    fn confirm_screen_shows_price() {
        let mut app = app_with_sale();
        app.screen = Screen::Confirm {
            cursor: SeatCursor { row: 3, seat: 2 },
            price: 10,
        };
        let content = screen_text(&app);
        assert!(content.contains("Buy seat 2 in row 3 for $10?"));
        assert!(content.contains("no refunds"));
    }

    #[test]
    fn statistics_screen_shows_figures() {
        let mut app = app_with_sale();
        app.screen = Screen::Statistics { cursor: SeatCursor::default() };
        let content = screen_text(&app);
        assert!(content.contains("1 of 16"));
        assert!(content.contains("6.25%"));
        assert!(content.contains("$160"));
    }

    #[test]
    fn largest_theatre_renders_without_panic() {
        let app = App::new(Theatre::new(9, 9).unwrap());
        let mut terminal = make_terminal();
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn each_screen_shows_its_title_and_key_help() {
        let cursor = SeatCursor::default();
        let cases = [
            (Screen::seat_map(cursor), "Cinema", "[Enter] buy"),
            (Screen::Confirm { cursor, price: 8 }, "Confirm Purchase", "[Y] yes, buy"),
            (Screen::Statistics { cursor }, "Statistics", "[Esc] back"),
        ];
        for (screen, title, help) in cases {
            let mut app = app_with_sale();
            app.screen = screen;
            let content = screen_text(&app);
            assert!(content.starts_with(title), "title {:?} missing", title);
            assert!(content.contains(help), "help {:?} missing", help);
        }
    }
}
