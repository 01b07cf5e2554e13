//! cinema CLI
//!
//! Sell tickets for a single-screen movie theatre from the terminal.

use std::io;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cinema::menu::{Console, run_menu};
use cinema::report::{format_sales, format_statistics};
use cinema::theatre::Theatre;
use cinema::tui::run::run as run_tui;
use cinema::types::{OutputFormat, SalesReport, SeatRef};

#[derive(Parser)]
#[command(name = "cinema")]
#[command(about = "Sell tickets for a single-screen movie theatre")]
#[command(version)]
struct Cli {
    /// Log theatre activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults to the text menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Text menu: show seats, buy tickets, view statistics
    Menu {
        /// Number of rows (1-9); asked for when omitted
        #[arg(long, env = "CINEMA_ROWS", allow_negative_numbers = true)]
        rows: Option<i32>,

        /// Seats in each row (1-9); asked for when omitted
        #[arg(long, env = "CINEMA_SEATS", allow_negative_numbers = true)]
        seats: Option<i32>,
    },

    /// Interactive full-screen seat picker
    Tui {
        #[command(flatten)]
        theatre: TheatreArgs,
    },

    /// Sell a list of seats in one go and report the outcome
    Sell {
        #[command(flatten)]
        theatre: TheatreArgs,

        /// Seats to sell, as ROW,SEAT (1-based; put negatives after `--`)
        #[arg(value_parser = parse_seat_ref)]
        seats_to_sell: Vec<SeatRef>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Args)]
struct TheatreArgs {
    /// Number of rows (1-9)
    #[arg(long, env = "CINEMA_ROWS", allow_negative_numbers = true)]
    rows: i32,

    /// Seats in each row (1-9)
    #[arg(long, env = "CINEMA_SEATS", allow_negative_numbers = true)]
    seats: i32,
}

impl TheatreArgs {
    fn build(&self) -> Result<Theatre, String> {
        Theatre::new(self.rows, self.seats).map_err(|e| e.to_string())
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Parse "ROW,SEAT" into an unvalidated seat reference.
fn parse_seat_ref(s: &str) -> Result<SeatRef, String> {
    let (row, seat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,SEAT, got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("row is not a whole number: {:?}", row))?;
    let seat = seat
        .trim()
        .parse()
        .map_err(|_| format!("seat is not a whole number: {:?}", seat))?;
    Ok(SeatRef { row, seat })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Log lines on the alternate screen would corrupt the seat picker.
    let tui = matches!(cli.command, Some(Commands::Tui { .. }));
    init_logging(cli.verbose && !tui);

    let result = match cli.command {
        None => cmd_menu(None, None),
        Some(Commands::Menu { rows, seats }) => cmd_menu(rows, seats),
        Some(Commands::Tui { theatre }) => cmd_tui(&theatre),
        Some(Commands::Sell {
            theatre,
            seats_to_sell,
            format,
        }) => cmd_sell(&theatre, &seats_to_sell, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "cinema=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_menu(rows: Option<i32>, seats: Option<i32>) -> Result<(), String> {
    let theatre = match (rows, seats) {
        (Some(rows), Some(seats)) => Some(Theatre::new(rows, seats).map_err(|e| e.to_string())?),
        (None, None) => None,
        _ => return Err("Specify both --rows and --seats, or neither".to_string()),
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_menu(&mut console, theatre).map_err(|e| e.to_string())
}

fn cmd_tui(args: &TheatreArgs) -> Result<(), String> {
    let theatre = args.build()?;
    let theatre = run_tui(theatre).map_err(|e| e.to_string())?;

    print!(
        "{}",
        format_statistics(&theatre.statistics(), OutputFormat::Human)
    );
    Ok(())
}

fn cmd_sell(args: &TheatreArgs, seats: &[SeatRef], format: OutputFormat) -> Result<(), String> {
    let mut theatre = args.build()?;
    let sales = theatre.sell_all(seats);

    let report = SalesReport {
        dimensions: theatre.dimensions(),
        sales,
        statistics: theatre.statistics(),
    };

    print!("{}", format_sales(&report, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
