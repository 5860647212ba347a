//! Command-line interface definitions.
//!
//! Every option has a default, so running the binary with no arguments from a
//! directory holding `path.txt` and `cookies.txt` does a full 14-day sweep.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `crossword_fetch`.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./path.txt, ./cookies.txt, 14 days, America/New_York
/// crossword_fetch
///
/// # Shorter window with config files elsewhere
/// crossword_fetch --path-file ~/.config/xw/path.txt --cookies ~/.config/xw/cookies.txt --days 3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// File whose first line is the directory puzzles are saved into
    #[arg(short, long, default_value = "path.txt")]
    pub path_file: PathBuf,

    /// Netscape-format cookie jar holding the NYT session cookies
    #[arg(short, long, default_value = "cookies.txt")]
    pub cookies: PathBuf,

    /// Number of days to check, counting back from today
    #[arg(short, long, default_value_t = 14)]
    pub days: u32,

    /// IANA timezone that decides what "today" is
    #[arg(short, long, default_value = "America/New_York")]
    pub timezone: String,

    /// Cookie-jar domain whose cookies are sent to the NYT
    #[arg(long, default_value = "nytimes.com")]
    pub cookie_domain: String,
}
