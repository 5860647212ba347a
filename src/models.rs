//! Data carried between the fetchers, the workflows, and the persister.
//!
//! - [`FetchResult`]: what one request for one puzzle produced
//! - [`Publisher`]: which source a payload came from (used for logging only)
//! - [`Outcome`]: what a per-day workflow did
//! - [`RunSummary`]: tallies for the end-of-run log line

use crate::error::FetchError;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Result of a single puzzle request.
///
/// Fetchers only ever produce [`FetchResult::Success`] or
/// [`FetchResult::HardFailure`]. Whether a failure means "not released yet"
/// depends on which date was asked for, so the workflows decide that through
/// [`FetchResult::or_unreleased`].
#[derive(Debug)]
pub enum FetchResult {
    /// HTTP 200 with the fully buffered PDF body.
    Success(Vec<u8>),
    /// The puzzle for the requested date has not been published yet.
    NotYetAvailable,
    /// Non-200 status or transport error.
    HardFailure(FetchError),
}

impl FetchResult {
    /// Reinterpret a hard failure on a forward-looking request as an
    /// unreleased puzzle.
    pub fn or_unreleased(self) -> FetchResult {
        match self {
            FetchResult::HardFailure(e) => {
                debug!(error = %e, "Treating failed forward fetch as unreleased");
                FetchResult::NotYetAvailable
            }
            other => other,
        }
    }
}

/// The two puzzle sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publisher {
    Nyt,
    Wsj,
}

impl Publisher {
    pub fn label(self) -> &'static str {
        match self {
            Publisher::Nyt => "NYTC",
            Publisher::Wsj => "WSJC",
        }
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What one publisher's workflow did for one scheduled day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new PDF was written.
    Saved(PathBuf),
    /// A file with the derived name was already present; nothing written.
    AlreadyStored(PathBuf),
    /// The forward fetch failed; the puzzle is assumed unreleased.
    NotYetReleased,
}

/// Counts of workflow outcomes over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub already_stored: usize,
    pub not_released: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Saved(_) => self.saved += 1,
            Outcome::AlreadyStored(_) => self.already_stored += 1,
            Outcome::NotYetReleased => self.not_released += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_or_unreleased_maps_failures_only() {
        let failed = FetchResult::HardFailure(FetchError::Status {
            status: StatusCode::FORBIDDEN,
        });
        assert!(matches!(failed.or_unreleased(), FetchResult::NotYetAvailable));

        let ok = FetchResult::Success(b"%PDF".to_vec()).or_unreleased();
        assert!(matches!(ok, FetchResult::Success(body) if body == b"%PDF"));
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(&Outcome::Saved(PathBuf::from("a.pdf")));
        summary.record(&Outcome::AlreadyStored(PathBuf::from("a.pdf")));
        summary.record(&Outcome::NotYetReleased);
        summary.record(&Outcome::NotYetReleased);
        assert_eq!(
            summary,
            RunSummary {
                saved: 1,
                already_stored: 1,
                not_released: 2
            }
        );
    }
}
