//! Error types for configuration, fetching, and the run loop.

use chrono::NaiveDate;
use reqwest::StatusCode;
use std::path::PathBuf;

/// Why a single puzzle request did not yield a PDF.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status}")]
    Status { status: StatusCode },

    #[error("request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("puzzle not available")]
    Unavailable,

    #[error("invalid puzzle URL: {source}")]
    Url {
        #[from]
        source: url::ParseError,
    },
}

/// Problems reading the startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} does not name an output directory")]
    EmptySavePath { path: PathBuf },

    #[error("unknown timezone `{name}`: {reason}")]
    Timezone { name: String, reason: String },
}

/// Conditions that stop the date window early.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("NYT cookie likely expired or invalid; probe for {date} failed: {source}")]
    CredentialsExpired {
        date: NaiveDate,
        source: FetchError,
    },

    #[error("failed to write {path}: {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },
}
