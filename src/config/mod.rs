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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{loader::RetryPolicy, model::Season};

const CONFIG_NAME: &str = "archivo";

const ARCHIVE_URL: &str = "https://archivo-prod.sfo3.digitaloceanspaces.com/audio";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Location of the per-season `s0N.csv` resources.
    pub catalog_url: String,
    /// Prefix for every track link in the CSV resources.
    pub base_url: String,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
    /// Initial playback volume, 0 to 100.
    pub volume: u32,
    pub page_size: usize,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_url: ARCHIVE_URL.to_string(),
            base_url: ARCHIVE_URL.to_string(),
            retry_attempts: 3,
            retry_delay_ms: 1000,
            volume: 77,
            page_size: 48,
            log_file: "archivo.log".to_string(),
        }
    }
}

impl AppConfig {
    pub fn season_url(&self, season: Season) -> String {
        format!(
            "{}/s{:02}.csv",
            self.catalog_url.trim_end_matches('/'),
            season.number()
        )
    }

    /// Every season paired with its CSV resource, in catalog order.
    pub fn season_sources(&self) -> Vec<(Season, String)> {
        Season::ALL
            .into_iter()
            .map(|s| (s, self.season_url(s)))
            .collect()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry_attempts,
            delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

/// Loads the configuration file, creating it with defaults on first run and
/// falling back to defaults if it cannot be read.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_urls_follow_numbering() {
        let config = AppConfig::default();
        assert_eq!(
            config.season_url(Season::Winter),
            "https://archivo-prod.sfo3.digitaloceanspaces.com/audio/s02.csv"
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let config = AppConfig {
            catalog_url: "https://cdn/audio/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.season_url(Season::Summer), "https://cdn/audio/s04.csv");
    }

    #[test]
    fn season_sources_are_in_catalog_order() {
        let seasons: Vec<Season> = AppConfig::default()
            .season_sources()
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(seasons, Season::ALL.to_vec());
    }

    #[test]
    fn retry_policy_from_config() {
        let config = AppConfig {
            retry_attempts: 5,
            retry_delay_ms: 250,
            ..AppConfig::default()
        };
        assert_eq!(
            config.retry_policy(),
            RetryPolicy {
                max_attempts: 5,
                delay: Duration::from_millis(250)
            }
        );
    }
}
