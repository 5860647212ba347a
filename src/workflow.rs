//! Per-day download workflows.
//!
//! Both workflows fetch the puzzle for `target` (the scheduled day plus one)
//! and hand a successful payload to the [`PdfStore`]. A failed forward fetch is
//! never an error: the puzzle simply is not out yet.
//!
//! The NYT workflow first fetches the scheduled day itself. That puzzle is
//! always published, so a failure there means the session cookies no longer
//! work and the run is aborted with [`RunError::CredentialsExpired`] before it
//! logs a false "not yet released" for every remaining day.

use crate::error::{FetchError, RunError};
use crate::models::{FetchResult, Outcome};
use crate::outputs::pdf::PdfStore;
use crate::sources::PuzzleSource;
use chrono::NaiveDate;
use tracing::{error, info, instrument};

/// Probe `today`, then fetch and store `target`.
///
/// # Errors
///
/// - [`RunError::CredentialsExpired`] if the probe for `today` fails
/// - [`RunError::Storage`] if the puzzle cannot be written
#[instrument(level = "info", skip_all, fields(source = %source.publisher(), %today, %target))]
pub async fn probe_then_fetch<S: PuzzleSource>(
    source: &S,
    store: &PdfStore,
    today: NaiveDate,
    target: NaiveDate,
) -> Result<Outcome, RunError> {
    info!("Checking {today}'s crossword.");
    match source.fetch(today).await {
        FetchResult::Success(_) => info!("Successfully checked {today}'s crossword."),
        FetchResult::NotYetAvailable => {
            error!("Probe for {today}'s crossword found nothing");
            return Err(RunError::CredentialsExpired {
                date: today,
                source: FetchError::Unavailable,
            });
        }
        FetchResult::HardFailure(e) => {
            error!(error = %e, "NYT cookie likely expired or invalid.");
            return Err(RunError::CredentialsExpired {
                date: today,
                source: e,
            });
        }
    }

    fetch_and_store(source, store, target).await
}

/// Fetch and store `target` with no probe.
///
/// # Errors
///
/// [`RunError::Storage`] if the puzzle cannot be written.
#[instrument(level = "info", skip_all, fields(source = %source.publisher(), %target))]
pub async fn fetch_only<S: PuzzleSource>(
    source: &S,
    store: &PdfStore,
    target: NaiveDate,
) -> Result<Outcome, RunError> {
    fetch_and_store(source, store, target).await
}

async fn fetch_and_store<S: PuzzleSource>(
    source: &S,
    store: &PdfStore,
    target: NaiveDate,
) -> Result<Outcome, RunError> {
    info!("Downloading {target}'s crossword.");
    let FetchResult::Success(body) = source.fetch(target).await.or_unreleased() else {
        info!("{target}'s crossword is not yet released.");
        return Ok(Outcome::NotYetReleased);
    };

    info!(bytes = body.len(), "Successfully downloaded {target}'s crossword.");
    store.persist(target, source.publisher(), &body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Publisher;
    use crate::sources::testing::ScriptedSource;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[tokio::test]
    async fn test_probe_failure_is_fatal_and_skips_forward_fetch() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PdfStore::new(tmp.path());
        let nyt = ScriptedSource::new(Publisher::Nyt).with_puzzle(date(16), b"%PDF");

        let err = probe_then_fetch(&nyt, &store, date(15), date(16))
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::CredentialsExpired { date: d, .. } if d == date(15)));
        assert_eq!(nyt.calls(), vec![date(15)]);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_probe_unreleased_today_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PdfStore::new(tmp.path());
        let nyt = ScriptedSource::new(Publisher::Nyt)
            .with_unreleased(date(15))
            .with_puzzle(date(16), b"%PDF");

        let err = probe_then_fetch(&nyt, &store, date(15), date(16))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RunError::CredentialsExpired {
                source: FetchError::Unavailable,
                ..
            }
        ));
        assert_eq!(nyt.calls(), vec![date(15)]);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_forward_unreleased_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PdfStore::new(tmp.path());
        let wsj = ScriptedSource::new(Publisher::Wsj).with_unreleased(date(16));

        let outcome = fetch_only(&wsj, &store, date(16)).await.unwrap();

        assert_eq!(outcome, Outcome::NotYetReleased);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_probe_ok_forward_missing_is_not_released() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PdfStore::new(tmp.path());
        let nyt = ScriptedSource::new(Publisher::Nyt).with_puzzle(date(15), b"%PDF");

        let outcome = probe_then_fetch(&nyt, &store, date(15), date(16)).await.unwrap();

        assert_eq!(outcome, Outcome::NotYetReleased);
        assert_eq!(nyt.calls(), vec![date(15), date(16)]);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_probe_ok_forward_ok_saves_target() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PdfStore::new(tmp.path());
        let nyt = ScriptedSource::new(Publisher::Nyt)
            .with_puzzle(date(15), b"%PDF-15")
            .with_puzzle(date(16), b"%PDF-16");

        let outcome = probe_then_fetch(&nyt, &store, date(15), date(16)).await.unwrap();

        let path = tmp.path().join("2024-03-16-Sat-crossword.pdf");
        assert_eq!(outcome, Outcome::Saved(path.clone()));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-16");
    }

    #[tokio::test]
    async fn test_fetch_only_never_probes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PdfStore::new(tmp.path());
        let wsj = ScriptedSource::new(Publisher::Wsj);

        let outcome = fetch_only(&wsj, &store, date(16)).await.unwrap();

        assert_eq!(outcome, Outcome::NotYetReleased);
        assert_eq!(wsj.calls(), vec![date(16)]);
    }

    #[tokio::test]
    async fn test_fetch_only_skips_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = PdfStore::new(tmp.path());
        let existing = tmp.path().join("2024-03-16-Sat-crossword.pdf");
        std::fs::write(&existing, b"%PDF-old").unwrap();
        let wsj = ScriptedSource::new(Publisher::Wsj).with_puzzle(date(16), b"%PDF-new");

        let outcome = fetch_only(&wsj, &store, date(16)).await.unwrap();

        assert_eq!(outcome, Outcome::AlreadyStored(existing.clone()));
        assert_eq!(std::fs::read(existing).unwrap(), b"%PDF-old");
    }
}
