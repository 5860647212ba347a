//! # Crossword Fetch
//!
//! Downloads the printable daily crossword from the New York Times and the
//! Wall Street Journal into a local directory, skipping puzzles that are
//! already there.
//!
//! ## Usage
//!
//! ```sh
//! # reads ./path.txt and ./cookies.txt
//! crossword_fetch
//! ```
//!
//! ## Flow
//!
//! For each of the last 14 days (newest first, in New York time):
//! 1. **NYT**: fetch that day's puzzle to prove the session cookies still
//!    work, then fetch the next day's puzzle and save it
//! 2. **WSJ**: fetch the next day's puzzle and save it
//!
//! A failed NYT check ends the run with exit status 1. A failed next-day
//! fetch just means the puzzle is not out yet.

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod schedule;
mod sources;
mod utils;
mod workflow;

use cli::Cli;
use config::Config;
use error::RunError;
use models::RunSummary;
use outputs::pdf::PdfStore;
use schedule::{date_window, today_in};
use sources::nyt::NytSource;
use sources::wsj::WsjSource;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("crossword_fetch starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = Config::load(&args).await?;

    if let Err(e) = ensure_writable_dir(&config.save_path).await {
        error!(
            path = %config.save_path.display(),
            error = %e,
            "Save directory is not writable (fix perms or point path.txt elsewhere)"
        );
        return Err(e.into());
    }

    let client = sources::client_builder().build()?;
    let nyt = NytSource::new(client.clone(), config.nyt_cookies.clone())?;
    let wsj = WsjSource::new(client)?;
    let store = PdfStore::new(config.save_path.clone());

    let today = today_in(Utc::now(), &config.timezone);
    info!(%today, days = config.days, timezone = %config.timezone, "Checking date window");

    let result = schedule::run(&nyt, &wsj, &store, date_window(today, config.days)).await;
    let elapsed = start_time.elapsed();

    Ok(ExitCode::from(exit_status(result, elapsed)?))
}

/// Map the outcome of a run to the process exit status.
///
/// An expired NYT session is an expected way for a run to end and becomes
/// status 1. Any other [`RunError`] is handed back for `main` to propagate.
fn exit_status(
    result: Result<RunSummary, RunError>,
    elapsed: Duration,
) -> Result<u8, RunError> {
    match result {
        Ok(summary) => {
            info!(
                ?elapsed,
                saved = summary.saved,
                already_stored = summary.already_stored,
                not_released = summary.not_released,
                "Execution complete"
            );
            Ok(0)
        }
        Err(e @ RunError::CredentialsExpired { .. }) => {
            error!(?elapsed, error = %e, "Stopping early; refresh cookies.txt");
            Ok(1)
        }
        Err(e) => {
            error!(?elapsed, error = %e, "Run failed");
            Err(e)
        }
    }
}
