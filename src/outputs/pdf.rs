//! Persisting puzzle PDFs.
//!
//! The save directory doubles as the download ledger: a puzzle is considered
//! downloaded exactly when a file with its derived name exists. Writes go
//! straight to the final path with no temp file, so an interrupted write
//! leaves a truncated file that later runs will skip.

use crate::error::RunError;
use crate::models::{Outcome, Publisher};
use crate::utils::puzzle_filename;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Writes puzzles into a single directory, one file per date.
#[derive(Debug, Clone)]
pub struct PdfStore {
    save_path: PathBuf,
}

impl PdfStore {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Where the puzzle for `date` is stored, whichever publisher it came from.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.save_path.join(puzzle_filename(date))
    }

    /// Write `body` as the puzzle for `date` unless that file already exists.
    ///
    /// # Errors
    ///
    /// [`RunError::Storage`] if the existence check or the write fails.
    #[instrument(level = "info", skip_all, fields(%date, source = %publisher, bytes = body.len()))]
    pub async fn persist(
        &self,
        date: NaiveDate,
        publisher: Publisher,
        body: &[u8],
    ) -> Result<Outcome, RunError> {
        let path = self.path_for(date);
        let storage = |source| RunError::Storage {
            path: path.clone(),
            source,
        };

        if fs::try_exists(&path).await.map_err(storage)? {
            info!(path = %path.display(), "File already exists.");
            return Ok(Outcome::AlreadyStored(path));
        }

        info!("Saving file locally.");
        fs::write(&path, body).await.map_err(storage)?;
        info!(path = %path.display(), "Successfully saved {}.", puzzle_filename(date));
        Ok(Outcome::Saved(path))
    }
}
