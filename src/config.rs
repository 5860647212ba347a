//! Startup configuration: output directory, NYT cookies, and timezone.
//!
//! Everything here is read once before the first request and never reloaded.

use crate::cli::Cli;
use crate::error::ConfigError;
use chrono_tz::Tz;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory puzzles are written into.
    pub save_path: PathBuf,
    /// `Cookie` header value sent with NYT requests.
    pub nyt_cookies: String,
    /// Timezone "today" is computed in.
    pub timezone: Tz,
    /// Number of days to walk back from today, today included.
    pub days: u32,
}

impl Config {
    #[instrument(level = "info", skip_all)]
    pub async fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let save_path = load_save_path(&cli.path_file).await?;
        let nyt_cookies = load_cookies(&cli.cookies, &cli.cookie_domain).await?;
        let timezone = parse_timezone(&cli.timezone)?;

        if nyt_cookies.is_empty() {
            warn!(
                cookies = %cli.cookies.display(),
                domain = %cli.cookie_domain,
                "No cookies matched; NYT requests will be anonymous"
            );
        }

        info!(
            save_path = %save_path.display(),
            timezone = %timezone,
            days = cli.days,
            "Loaded configuration"
        );
        Ok(Self {
            save_path,
            nyt_cookies,
            timezone,
            days: cli.days,
        })
    }
}

/// Read the output directory from a single-line text file.
pub async fn load_save_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let contents = read(path).await?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptySavePath {
            path: path.to_path_buf(),
        });
    }
    Ok(PathBuf::from(trimmed))
}

/// Read a Netscape cookie jar and build the `Cookie` header for `domain`.
pub async fn load_cookies(path: &Path, domain: &str) -> Result<String, ConfigError> {
    let contents = read(path).await?;
    Ok(cookie_header(&contents, domain))
}

/// Build a `Cookie` header value from Netscape cookie-jar text.
///
/// Comment and blank lines are skipped. Each remaining row must have the seven
/// tab-separated fields of the format; rows whose domain column contains
/// `domain` contribute `name=value`.
pub fn cookie_header(jar: &str, domain: &str) -> String {
    jar.lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| line.trim_end_matches('\r').split('\t').collect::<Vec<_>>())
        .filter(|fields| fields.len() >= 7 && fields[0].contains(domain))
        .map(|fields| {
            debug!(domain = fields[0], name = fields[5], "Using cookie");
            format!("{}={}", fields[5], fields[6])
        })
        .join("; ")
}

/// Parse an IANA timezone name such as `America/New_York`.
pub fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>().map_err(|e| ConfigError::Timezone {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

async fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
}
