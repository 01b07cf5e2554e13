//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and is the only place the theatre is mutated while the TUI runs.
//!
//! A key reader thread feeds an mpsc channel; the event loop owns the
//! theatre and consumes from the channel.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::info;

use crate::theatre::Theatre;

use super::state::{Action, App, AppEvent, Effect, Transition};
use super::update::{after_sale, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action, and for release
/// and repeat events so one keystroke is one action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Screens
        KeyCode::Char('s') => Some(Action::ShowStatistics),
        KeyCode::Char('q') => Some(Action::Quit),

        // Confirm
        KeyCode::Char('Y') | KeyCode::Char('y') => Some(Action::ConfirmYes),
        KeyCode::Char('N') | KeyCode::Char('n') => Some(Action::ConfirmNo),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue, // ignore mouse, focus, paste
                Err(_) => break,
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive seat picker until the user quits.
///
/// Returns the theatre so the caller can report final statistics.
pub fn run(theatre: Theatre) -> io::Result<Theatre> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(theatre);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    // Leave raw mode even when drawing failed.
    let result = event_loop(&mut terminal, &mut app, &rx);
    restore_terminal()?;
    result?;

    Ok(app.theatre)
}

/// Draw and dispatch until the user quits or the key reader ends.
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
) -> Result<(), B::Error> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // reader thread ended
        };

        if let AppEvent::Key(key) = event {
            if let Some(action) = map_key(key) {
                dispatch(app, &action);
            }
        }
    }

    Ok(())
}

/// Run one action through `update` and apply the resulting transition.
pub fn dispatch(app: &mut App, action: &Action) {
    let screen = std::mem::take(&mut app.screen);
    match update(screen, action, &app.theatre) {
        Transition::Screen(new_screen) => app.screen = new_screen,
        Transition::Quit => app.should_quit = true,
        Transition::Effect(effect) => handle_effect(effect, app),
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App) {
    match effect {
        Effect::Sell { cursor } => {
            let outcome = app
                .theatre
                .sell(i32::from(cursor.row), i32::from(cursor.seat))
                .map_err(|e| e.to_string());
            if let Ok(price) = outcome {
                info!(row = cursor.row, seat = cursor.seat, price, "ticket sold from seat picker");
            }
            app.screen = after_sale(cursor, outcome);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::{Notice, SeatCursor, Screen};
    use ratatui::backend::TestBackend;

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(70, 24)).unwrap()
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        let cases = [
            ('h', Action::MoveLeft),
            ('j', Action::MoveDown),
            ('k', Action::MoveUp),
            ('l', Action::MoveRight),
        ];
        for (c, action) in cases {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(action));
        }
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(map_key(up), Some(Action::MoveUp));
        assert_eq!(map_key(left), Some(Action::MoveLeft));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn buying_through_dispatch_sells_the_seat() {
        let mut app = App::new(Theatre::new(4, 4).unwrap());

        dispatch(&mut app, &Action::MoveRight);
        dispatch(&mut app, &Action::Enter);
        assert_eq!(
            app.screen,
            Screen::Confirm { cursor: SeatCursor { row: 1, seat: 2 }, price: 10 }
        );

        dispatch(&mut app, &Action::ConfirmYes);
        assert_eq!(
            app.screen,
            Screen::SeatMap {
                cursor: SeatCursor { row: 1, seat: 2 },
                notice: Some(Notice::Sold { row: 1, seat: 2, price: 10 }),
            }
        );
        assert_eq!(app.theatre.statistics().current_income, 10);
    }

    #[test]
    fn declining_leaves_theatre_untouched() {
        let mut app = App::new(Theatre::new(4, 4).unwrap());
        let before = app.theatre.clone();

        dispatch(&mut app, &Action::Enter);
        dispatch(&mut app, &Action::ConfirmNo);

        assert_eq!(app.theatre, before);
        assert_eq!(app.screen, Screen::seat_map(SeatCursor::default()));
    }

    #[test]
    fn release_and_repeat_events_are_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let key = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, kind);
            assert_eq!(map_key(key), None);
        }
    }

    #[test]
    fn one_enter_keystroke_stops_at_confirmation() {
        let mut app = App::new(Theatre::new(4, 4).unwrap());

        for kind in [KeyEventKind::Press, KeyEventKind::Release] {
            let key = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, kind);
            if let Some(action) = map_key(key) {
                dispatch(&mut app, &action);
            }
        }

        assert_eq!(app.theatre.statistics().current_income, 0);
        assert_eq!(
            app.screen,
            Screen::Confirm { cursor: SeatCursor::default(), price: 10 }
        );
    }

    #[test]
    fn event_loop_stops_after_quit_key() {
        let mut terminal = test_terminal();
        let mut app = App::new(Theatre::new(2, 2).unwrap());
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
            .unwrap();

        event_loop(&mut terminal, &mut app, &rx).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn event_loop_stops_when_reader_is_gone() {
        let mut terminal = test_terminal();
        let mut app = App::new(Theatre::new(2, 2).unwrap());
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
        tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)))
            .unwrap();
        drop(tx);

        event_loop(&mut terminal, &mut app, &rx).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.theatre.statistics().current_income, 10);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(Theatre::new(1, 1).unwrap());
        dispatch(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }
}
