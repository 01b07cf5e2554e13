//! Text menu loop.
//!
//! Reads numbers line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so the whole conversation runs in tests without
//! a terminal. Retries on bad input are this module's job; the theatre
//! itself never retries.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::error::{Dimension, TheatreError};
use crate::report::{format_grid, format_statistics};
use crate::theatre::{Theatre, validate_dimension};
use crate::types::OutputFormat;

const ROWS_PROMPT: &str = "Enter the number of rows:";
const SEATS_PROMPT: &str = "Enter the number of seats in each row:";
const ROW_PROMPT: &str = "Enter a row number:";
const SEAT_PROMPT: &str = "Enter a seat number in that row:";
const MENU: &str = "1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit";

// ============================================================================
// TYPES
// ============================================================================

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowSeats,
    BuyTicket,
    Statistics,
    Exit,
}

impl TryFrom<i32> for MenuChoice {
    type Error = InputError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::ShowSeats),
            2 => Ok(MenuChoice::BuyTicket),
            3 => Ok(MenuChoice::Statistics),
            0 => Ok(MenuChoice::Exit),
            other => Err(InputError::UnknownChoice(other)),
        }
    }
}

/// Problems reading a line of user input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected a whole number, got {0:?}")]
    NotANumber(String),

    #[error("no menu entry {0}")]
    UnknownChoice(i32),

    #[error("input ended")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Line-oriented prompt/answer channel.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Print `prompt` and parse the next line as an integer.
    pub fn ask_number(&mut self, prompt: &str) -> Result<i32, InputError> {
        self.say(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }

        let answer = line.trim();
        answer
            .parse()
            .map_err(|_| InputError::NotANumber(answer.to_string()))
    }

    /// Ask until a number arrives. `None` means the input ended.
    fn ask_until_number(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            match self.ask_number(prompt) {
                Ok(n) => return Ok(Some(n)),
                Err(InputError::Eof) => return Ok(None),
                Err(InputError::Io(e)) => return Err(e),
                Err(e) => self.say(&format!("\nWrong input! {}\n", e))?,
            }
        }
    }
}

// ============================================================================
// LOOP
// ============================================================================

/// Run the menu until the user exits or the input ends.
///
/// With `theatre` set to `None`, the dimensions are asked for first and
/// re-asked until they form a valid theatre.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    theatre: Option<Theatre>,
) -> io::Result<()> {
    let mut theatre = match theatre {
        Some(t) => t,
        None => match ask_theatre(console)? {
            Some(t) => t,
            None => return Ok(()),
        },
    };

    loop {
        console.say("")?;
        let Some(n) = console.ask_until_number(MENU)? else {
            return Ok(());
        };

        let choice = match MenuChoice::try_from(n) {
            Ok(c) => c,
            Err(e) => {
                console.say(&format!("\nWrong input! {}", e))?;
                continue;
            }
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::ShowSeats => {
                console.say("")?;
                console.say(format_grid(&theatre.render_grid()).trim_end())?;
            }
            MenuChoice::BuyTicket => {
                if !buy_ticket(console, &mut theatre)? {
                    return Ok(());
                }
            }
            MenuChoice::Statistics => {
                let stats = format_statistics(&theatre.statistics(), OutputFormat::Human);
                console.say("")?;
                console.say(stats.trim_end())?;
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// Ask for both dimensions until they are valid. `None` if input ended.
fn ask_theatre<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<Theatre>> {
    loop {
        let Some(rows) =
            ask_valid(console, ROWS_PROMPT, |n| validate_dimension(Dimension::Rows, n))?
        else {
            return Ok(None);
        };
        let Some(seats) =
            ask_valid(console, SEATS_PROMPT, |n| validate_dimension(Dimension::SeatsPerRow, n))?
        else {
            return Ok(None);
        };

        match Theatre::new(rows, seats) {
            Ok(theatre) => return Ok(Some(theatre)),
            Err(e) => console.say(&format!("\nWrong input! {}\n", e))?,
        }
    }
}

/// Ask for a seat until one is sold. Returns false if input ended first.
///
/// Each number is range-checked as soon as it is typed; only an already
/// sold seat sends the buyer back to the row prompt.
fn buy_ticket<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    theatre: &mut Theatre,
) -> io::Result<bool> {
    loop {
        console.say("")?;
        let Some(row) = ask_valid(console, ROW_PROMPT, |n| theatre.check_row(n))? else {
            return Ok(false);
        };
        let Some(seat) = ask_valid(console, SEAT_PROMPT, |n| theatre.check_seat(n))? else {
            return Ok(false);
        };

        match theatre.sell(row, seat) {
            Ok(price) => {
                console.say(&format!("\nTicket price: ${}", price))?;
                return Ok(true);
            }
            Err(e) => console.say(&format!("\nWrong input! {}", e))?,
        }
    }
}

/// Re-ask `prompt` until `check` accepts the number. `None` if input ended.
fn ask_valid<R, W, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    check: F,
) -> io::Result<Option<i32>>
where
    R: BufRead,
    W: Write,
    F: Fn(i32) -> Result<u8, TheatreError>,
{
    loop {
        let Some(n) = console.ask_until_number(prompt)? else {
            return Ok(None);
        };
        match check(n) {
            Ok(_) => return Ok(Some(n)),
            Err(e) => console.say(&format!("\nWrong input! {}\n", e))?,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
