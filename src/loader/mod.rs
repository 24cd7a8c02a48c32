// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Season and catalog loading.
//!
//! This module turns the per-season CSV resources into tracks.
//!
//! * [`SeasonLoader`] fetches one season, retrying a bounded number of times
//!   on download or parse failure, and always produces a [`SeasonResult`]:
//!   failures end up in its `error` field rather than being returned.
//! * [`load_catalog`] runs a loader for every season at once and merges the
//!   results into a [`CatalogSnapshot`] after all of them have settled.
//!
//! # Sub-modules
//!
//! * [`mapper`]: Row to track mapping.
//! * [`source`]: CSV retrieval and parsing.

pub mod mapper;
pub mod source;

use std::{sync::Arc, thread, time::Duration};

use tracing::{debug, info, warn};

use crate::{
    error::LoadError,
    loader::{mapper::map_rows, source::CsvSource},
    model::{
        CsvRow, Season,
        catalog::{CatalogSnapshot, SeasonResult},
    },
};

/// Delay function used between retry attempts.
pub type Sleeper = Arc<dyn Fn(Duration) + Send + Sync>;

/// How many times to try a season and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// A sleeper that blocks the calling thread.
pub fn thread_sleeper() -> Sleeper {
    Arc::new(thread::sleep)
}

pub struct SeasonLoader<S: CsvSource> {
    source: S,
    base_url: String,
    retry: RetryPolicy,
    sleeper: Sleeper,
}

impl<S: CsvSource> SeasonLoader<S> {
    /// Creates a loader that sleeps the calling thread between attempts.
    ///
    /// # Arguments
    ///
    /// * `source` - Where CSV documents are fetched from.
    /// * `base_url` - The prefix for every track link.
    /// * `retry` - Attempt bound and back-off delay.
    pub fn new(source: S, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self::with_sleeper(source, base_url, retry, thread_sleeper())
    }

    pub fn with_sleeper(
        source: S,
        base_url: impl Into<String>,
        retry: RetryPolicy,
        sleeper: Sleeper,
    ) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            retry,
            sleeper,
        }
    }

    /// Loads one season.
    ///
    /// A document with parse errors counts as a failed attempt, as does a
    /// download error. Once every attempt has failed the result carries the
    /// last error and no tracks.
    pub fn load(&self, season: Season, url: &str) -> SeasonResult {
        let attempts = self.retry.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            debug!(%season, attempt, url, "Loading season CSV");

            match self.fetch_once(url) {
                Ok(rows) => {
                    let tracks = map_rows(&rows, &self.base_url, Some(season));
                    info!(%season, tracks = tracks.len(), "Season loaded");

                    return SeasonResult {
                        season,
                        tracks,
                        error: None,
                    };
                }
                Err(e) => {
                    debug!(%season, attempt, error = %e, "Season load attempt failed");
                    last_error = Some(e);

                    if attempt < attempts {
                        (self.sleeper)(self.retry.delay);
                    }
                }
            }
        }

        let error = last_error.map(|e| e.to_string()).unwrap_or_default();
        warn!(%season, attempts, error = %error, "Giving up on season");

        SeasonResult {
            season,
            tracks: vec![],
            error: Some(error),
        }
    }

    fn fetch_once(&self, url: &str) -> Result<Vec<CsvRow>, LoadError> {
        let document = self.source.fetch(url)?;

        if !document.errors.is_empty() {
            return Err(LoadError::Parse(document.errors));
        }

        Ok(document.rows)
    }
}

/// Loads every listed season concurrently and merges the results.
///
/// Each season runs on its own scoped thread; the snapshot is only built once
/// all of them have finished, so one slow or failing season delays but never
/// blocks the others' results.
pub fn load_catalog<S: CsvSource>(
    loader: &SeasonLoader<S>,
    seasons: &[(Season, String)],
) -> CatalogSnapshot {
    info!(seasons = seasons.len(), "Loading catalog");

    let results = thread::scope(|scope| {
        let handles: Vec<_> = seasons
            .iter()
            .map(|(season, url)| {
                let season = *season;
                (season, scope.spawn(move || loader.load(season, url)))
            })
            .collect();

        handles
            .into_iter()
            .map(|(season, handle)| {
                handle.join().unwrap_or_else(|_| SeasonResult {
                    season,
                    tracks: vec![],
                    error: Some(format!("Loader for {} failed unexpectedly", season)),
                })
            })
            .collect::<Vec<_>>()
    });

    let snapshot = CatalogSnapshot::merge(results);
    info!(
        tracks = snapshot.all_tracks.len(),
        failed = snapshot.errors.len(),
        "Catalog loaded"
    );

    snapshot
}
