//! Puzzle sources.
//!
//! Each submodule knows how to turn a date into a request for one publisher's
//! printable PDF:
//!
//! | Publisher | Module | Auth | Path |
//! |-----------|--------|------|------|
//! | New York Times | [`nyt`] | session cookies + Referer | `/svc/crosswords/v2/puzzle/print/<MonDDYY>.pdf` |
//! | Wall Street Journal | [`wsj`] | none | `/public/resources/documents/XWD<MMDDYYYY>.pdf` |
//!
//! Both classify responses the same way through [`get_pdf`]: HTTP 200 is a
//! success with the whole body buffered, anything else is a hard failure.

use crate::error::FetchError;
use crate::models::{FetchResult, Publisher};
use chrono::NaiveDate;
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder, RequestBuilder, StatusCode};
use tracing::{debug, instrument};

pub mod nyt;
pub mod wsj;

/// A publisher that can be asked for the puzzle of a given date.
pub trait PuzzleSource {
    /// Which publisher this source fetches from.
    fn publisher(&self) -> Publisher;

    /// Request the puzzle for `date`. The HTTP sources never return
    /// [`FetchResult::NotYetAvailable`]; see [`FetchResult::or_unreleased`].
    async fn fetch(&self, date: NaiveDate) -> FetchResult;
}

/// Client settings shared by both sources.
///
/// Redirects are not followed: an expired NYT session answers with a 302 to
/// the login page, and that must surface as a failed status rather than an
/// HTML body saved as a PDF.
pub fn client_builder() -> ClientBuilder {
    Client::builder().redirect(Policy::none())
}

/// Send a prepared GET and classify the response.
#[instrument(level = "debug", skip_all)]
pub async fn get_pdf(request: RequestBuilder) -> FetchResult {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return FetchResult::HardFailure(e.into()),
    };

    let status = response.status();
    if status != StatusCode::OK {
        return FetchResult::HardFailure(FetchError::Status { status });
    }

    match response.bytes().await {
        Ok(body) => {
            debug!(bytes = body.len(), "Received PDF body");
            FetchResult::Success(body.to_vec())
        }
        Err(e) => FetchResult::HardFailure(e.into()),
    }
}
