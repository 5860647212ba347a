//! Date encodings and file system helpers.
//!
//! Every value derived from a puzzle date lives here so the formats used in
//! URLs and filenames can be checked in one place:
//! - NYT print path token (`Mar1524`)
//! - WSJ document token (`XWD03152024`)
//! - stored filename (`2024-03-15-Fri-crossword.pdf`)

use chrono::NaiveDate;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// NYT print path token: abbreviated month, two-digit day, two-digit year.
pub fn nyt_token(date: NaiveDate) -> String {
    date.format("%b%d%y").to_string()
}

/// WSJ document token: `XWD` followed by `MMDDYYYY`.
pub fn wsj_token(date: NaiveDate) -> String {
    date.format("XWD%m%d%Y").to_string()
}

/// Filename a puzzle is stored under, keyed only by the puzzle's own date.
pub fn puzzle_filename(date: NaiveDate) -> String {
    date.format("%Y-%m-%d-%a-crossword.pdf").to_string()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    fs::File::create(&probe_path).await?;
    let _ = fs::remove_file(&probe_path).await;
    info!("Output directory is writable");
    Ok(())
}
