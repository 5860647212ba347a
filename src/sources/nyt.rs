//! New York Times crossword, printable PDF.
//!
//! Requests carry the subscriber's session cookies and the archive page as
//! `Referer`. An expired session and an unreleased puzzle both show up as a
//! non-200 status; telling them apart is the job of the probe in
//! [`crate::workflow::probe_then_fetch`].

use super::{get_pdf, PuzzleSource};
use crate::error::FetchError;
use crate::models::{FetchResult, Publisher};
use crate::utils::nyt_token;
use chrono::NaiveDate;
use reqwest::header::{COOKIE, REFERER};
use reqwest::Client;
use tracing::instrument;
use url::Url;

pub const BASE_URL: &str = "https://www.nytimes.com/";
pub const REFERER_URL: &str = "https://www.nytimes.com/crosswords/archive/daily";

/// Authenticated fetcher for NYT print puzzles.
#[derive(Debug, Clone)]
pub struct NytSource {
    client: Client,
    base: Url,
    cookies: String,
}

impl NytSource {
    pub fn new(client: Client, cookies: String) -> Result<Self, FetchError> {
        Ok(Self::with_base(client, Url::parse(BASE_URL)?, cookies))
    }

    pub fn with_base(client: Client, base: Url, cookies: String) -> Self {
        Self {
            client,
            base,
            cookies,
        }
    }

    pub fn puzzle_url(&self, date: NaiveDate) -> Result<Url, FetchError> {
        let path = format!("/svc/crosswords/v2/puzzle/print/{}.pdf", nyt_token(date));
        Ok(self.base.join(&path)?)
    }
}

impl PuzzleSource for NytSource {
    fn publisher(&self) -> Publisher {
        Publisher::Nyt
    }

    #[instrument(level = "info", skip(self), fields(source = "nyt"))]
    async fn fetch(&self, date: NaiveDate) -> FetchResult {
        let url = match self.puzzle_url(date) {
            Ok(url) => url,
            Err(e) => return FetchResult::HardFailure(e),
        };
        let request = self
            .client
            .get(url)
            .header(REFERER, REFERER_URL)
            .header(COOKIE, &self.cookies);
        get_pdf(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testing::{
        client, refused_url, serve_once, FORBIDDEN, PDF_OK, REDIRECT_TO_LOGIN,
    };
    use reqwest::StatusCode;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_puzzle_url() {
        let source = NytSource::new(Client::new(), String::new()).unwrap();
        assert_eq!(
            source.puzzle_url(date()).unwrap().as_str(),
            "https://www.nytimes.com/svc/crosswords/v2/puzzle/print/Mar1524.pdf"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_cookie_and_referer() {
        let (base, server) = serve_once(PDF_OK).await;
        let source = NytSource::with_base(client(), base, "NYT-S=abc123".to_string());

        let result = source.fetch(date()).await;
        let request = server.await.unwrap().to_ascii_lowercase();

        match result {
            FetchResult::Success(body) => assert_eq!(body, b"%PDF-1.4"),
            other => panic!("expected success, got {other:?}"),
        }
        assert!(request.starts_with("get /svc/crosswords/v2/puzzle/print/mar1524.pdf "));
        assert!(request.contains("cookie: nyt-s=abc123\r\n"));
        assert!(request.contains("referer: https://www.nytimes.com/crosswords/archive/daily\r\n"));
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_hard_failure() {
        let (base, server) = serve_once(FORBIDDEN).await;
        let source = NytSource::with_base(client(), base, String::new());

        let result = source.fetch(date()).await;
        server.await.unwrap();

        assert!(matches!(
            result,
            FetchResult::HardFailure(FetchError::Status {
                status: StatusCode::FORBIDDEN
            })
        ));
    }

    #[tokio::test]
    async fn test_fetch_login_redirect_is_not_followed() {
        let (base, server) = serve_once(REDIRECT_TO_LOGIN).await;
        let source = NytSource::with_base(client(), base, "NYT-S=stale".to_string());

        let result = source.fetch(date()).await;
        server.await.unwrap();

        assert!(
            matches!(
                result,
                FetchResult::HardFailure(FetchError::Status {
                    status: StatusCode::FOUND
                })
            ),
            "302 must be a hard failure, got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_fetch_connection_error_is_hard_failure() {
        let source = NytSource::with_base(client(), refused_url().await, String::new());
        assert!(matches!(
            source.fetch(date()).await,
            FetchResult::HardFailure(FetchError::Transport { .. })
        ));
    }
}
