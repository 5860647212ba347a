//! Wall Street Journal crossword, public PDF.

use super::{get_pdf, PuzzleSource};
use crate::error::FetchError;
use crate::models::{FetchResult, Publisher};
use crate::utils::wsj_token;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::instrument;
use url::Url;

pub const BASE_URL: &str = "https://s.wsj.net/";

/// Anonymous fetcher for WSJ puzzles.
#[derive(Debug, Clone)]
pub struct WsjSource {
    client: Client,
    base: Url,
}

impl WsjSource {
    pub fn new(client: Client) -> Result<Self, FetchError> {
        Ok(Self::with_base(client, Url::parse(BASE_URL)?))
    }

    pub fn with_base(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn puzzle_url(&self, date: NaiveDate) -> Result<Url, FetchError> {
        let path = format!("/public/resources/documents/{}.pdf", wsj_token(date));
        Ok(self.base.join(&path)?)
    }
}

impl PuzzleSource for WsjSource {
    fn publisher(&self) -> Publisher {
        Publisher::Wsj
    }

    #[instrument(level = "info", skip(self), fields(source = "wsj"))]
    async fn fetch(&self, date: NaiveDate) -> FetchResult {
        match self.puzzle_url(date) {
            Ok(url) => get_pdf(self.client.get(url)).await,
            Err(e) => FetchResult::HardFailure(e),
        }
    }
}
