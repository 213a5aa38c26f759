// UserSleuth - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Interactive prompting for whatever the flags did not supply
// 4. Running the query pipeline and presenting the result

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use usersleuth::core::model::FilterKind;
use usersleuth::core::present;
use usersleuth::{app, util};

/// UserSleuth - filter a JSON user store from the command line.
///
/// Filters the records in a JSON user store by a single field (name,
/// email, or age). Anything not supplied as a flag is asked for
/// interactively, so `usersleuth` with no arguments behaves as a prompt-
/// driven tool.
#[derive(Parser, Debug)]
#[command(name = "UserSleuth", version, about)]
struct Cli {
    /// Path to the JSON user store (defaults to users.json in the working directory).
    #[arg(short = 's', long = "store")]
    store: Option<PathBuf>,

    /// Field to filter by: name, email, or age (prompts if omitted).
    #[arg(short = 'b', long = "by")]
    by: Option<String>,

    /// Value to match against the chosen field (prompts if omitted).
    #[arg(short = 'v', long = "value")]
    value: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem (stderr, so stdout stays clean for results)
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "UserSleuth starting"
    );

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Terminal I/O failure");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let store = cli
        .store
        .unwrap_or_else(|| PathBuf::from(util::constants::DEFAULT_STORE_FILE));

    // Filter kind: flag value or interactive prompt. Both go through the
    // same case-insensitive parse, so `--by NAME` and a typed `NAME` are
    // equivalent.
    let raw_kind = match cli.by {
        Some(by) => by,
        None => prompt("What would you like to filter by? (name/email/age): ")?,
    };

    let kind = match raw_kind.parse::<FilterKind>() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::debug!(input = %e.input, "Rejected filter kind");
            // Rejection is not an error exit: same status as an empty result.
            println!(
                "Filtering by that option is not supported. \
                 Please choose 'name', 'email', or 'age'."
            );
            return Ok(());
        }
    };

    let value = match cli.value {
        Some(value) => value,
        None => prompt(kind.value_prompt())?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let results = app::query::run_query(&store, kind, value.trim(), &mut out)?;
    present::present(&results, &mut out)?;

    Ok(())
}

/// Print `question` to stdout (no trailing newline) and read one trimmed
/// line from stdin.
fn prompt(question: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{question}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
