//! Date window and the run loop.
//!
//! "Today" is taken in a named timezone rather than the host's, so a run on a
//! UTC server just after midnight still sees the publishers' calendar day.
//! Dates are processed newest first, one at a time: both workflows for a day
//! finish before the next day starts.

use crate::error::RunError;
use crate::models::RunSummary;
use crate::outputs::pdf::PdfStore;
use crate::sources::PuzzleSource;
use crate::workflow::{fetch_only, probe_then_fetch};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::iter;
use tracing::{info, instrument, warn};

/// Calendar date of `now` as observed in `tz`.
pub fn today_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

/// `today, today - 1, …` for `days` days.
pub fn date_window(today: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    iter::successors(Some(today), |d| d.pred_opt()).take(days as usize)
}

/// Run both publishers' workflows for every date in `dates`.
///
/// Each day's target is `date + 1`, computed once and handed to both
/// workflows.
///
/// # Errors
///
/// Stops at the first [`RunError`]: an expired NYT session or a failed write.
#[instrument(level = "info", skip_all, fields(save_path = %store.save_path().display()))]
pub async fn run<N, W, I>(
    nyt: &N,
    wsj: &W,
    store: &PdfStore,
    dates: I,
) -> Result<RunSummary, RunError>
where
    N: PuzzleSource,
    W: PuzzleSource,
    I: IntoIterator<Item = NaiveDate>,
{
    let mut summary = RunSummary::default();

    for today in dates {
        let Some(target) = today.succ_opt() else {
            warn!(%today, "No day after this date; skipping");
            continue;
        };

        info!("{} Block", nyt.publisher());
        let outcome = probe_then_fetch(nyt, store, today, target).await?;
        summary.record(&outcome);

        info!("{} Block", wsj.publisher());
        let outcome = fetch_only(wsj, store, target).await?;
        summary.record(&outcome);
    }

    Ok(summary)
}
