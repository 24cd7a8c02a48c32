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

//! Aggregate catalog state.
//!
//! This module holds what the user interface knows about the archive: the
//! combined track list, the per-season lookup, the per-season errors and
//! whether a load is still in flight. It only ever changes in two steps,
//! [`CatalogState::begin_load`] and [`CatalogState::publish`], so a partially
//! loaded catalog is never visible.

use std::collections::BTreeMap;

use crate::model::{Season, Track};

/// The outcome of loading one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonResult {
    pub season: Season,
    pub tracks: Vec<Track>,
    pub error: Option<String>,
}

/// The merged outcome of loading every season, built once all loads settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub all_tracks: Vec<Track>,
    pub season_data: BTreeMap<Season, Vec<Track>>,
    pub errors: BTreeMap<Season, String>,
}

impl CatalogSnapshot {
    /// Merges season results in catalog season order, regardless of the
    /// order the loads completed in.
    ///
    /// Source ids are only unique within a season, so every merged track has
    /// its id qualified with the season tag (`winter-12`) and its season set.
    pub fn merge(results: Vec<SeasonResult>) -> Self {
        let mut by_season: BTreeMap<Season, SeasonResult> =
            results.into_iter().map(|r| (r.season, r)).collect();

        let mut snapshot = CatalogSnapshot::default();

        for season in Season::ALL {
            let Some(result) = by_season.remove(&season) else {
                continue;
            };

            if let Some(error) = result.error {
                snapshot.errors.insert(season, error);
            }

            let tracks: Vec<Track> = result
                .tracks
                .into_iter()
                .map(|track| qualify(season, track))
                .collect();

            snapshot.all_tracks.extend(tracks.iter().cloned());
            snapshot.season_data.insert(season, tracks);
        }

        snapshot
    }
}

fn qualify(season: Season, mut track: Track) -> Track {
    track.id = format!("{}-{}", season.tag(), track.id);
    track.season = Some(season.tag().to_string());
    track
}

#[derive(Debug)]
pub struct CatalogState {
    all_tracks: Vec<Track>,
    season_data: BTreeMap<Season, Vec<Track>>,
    errors: BTreeMap<Season, String>,
    loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// A catalog that has not been loaded yet: every season empty and the
    /// loading flag raised.
    pub fn new() -> Self {
        Self {
            all_tracks: vec![],
            season_data: Season::ALL.into_iter().map(|s| (s, vec![])).collect(),
            errors: BTreeMap::new(),
            loading: true,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.errors.clear();
    }

    /// Publishes a completed load in one step and clears the loading flag.
    pub fn publish(&mut self, snapshot: CatalogSnapshot) {
        let CatalogSnapshot {
            all_tracks,
            mut season_data,
            errors,
        } = snapshot;

        for season in Season::ALL {
            season_data.entry(season).or_default();
        }

        self.all_tracks = all_tracks;
        self.season_data = season_data;
        self.errors = errors;
        self.loading = false;
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn all_tracks(&self) -> &[Track] {
        &self.all_tracks
    }

    /// The tracks that may be handed to the player, in catalog order.
    pub fn playable_tracks(&self) -> Vec<Track> {
        self.all_tracks
            .iter()
            .filter(|t| t.is_available())
            .cloned()
            .collect()
    }

    pub fn season_tracks(&self, season: Season) -> &[Track] {
        self.season_data
            .get(&season)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn season_error(&self, season: Season) -> Option<&str> {
        self.errors.get(&season).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Season, String> {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(season: Season, id: &str) -> Track {
        Track {
            id: id.to_string(),
            place: String::new(),
            date: String::new(),
            filename: format!("{}.mp3", id),
            length: String::new(),
            link: String::new(),
            is_available: "TRUE".to_string(),
            season: Some(season.tag().to_string()),
        }
    }

    fn result(season: Season, ids: &[&str], error: Option<&str>) -> SeasonResult {
        SeasonResult {
            season,
            tracks: ids.iter().map(|id| track(season, id)).collect(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn merge_concatenates_in_season_order() {
        let snapshot = CatalogSnapshot::merge(vec![
            result(Season::Summer, &["s1"], None),
            result(Season::Autumn, &["a1", "a2"], None),
            result(Season::Spring, &["p1"], None),
            result(Season::Winter, &["w1"], None),
        ]);

        let ids: Vec<&str> = snapshot.all_tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["autumn-a1", "autumn-a2", "winter-w1", "spring-p1", "summer-s1"]
        );
        assert!(snapshot.errors.is_empty());
    }

    #[test]
    fn merge_qualifies_ids_shared_between_seasons() {
        let snapshot = CatalogSnapshot::merge(vec![
            result(Season::Autumn, &["1", "2"], None),
            result(Season::Winter, &["1", "2"], None),
        ]);

        let ids: Vec<&str> = snapshot.all_tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["autumn-1", "autumn-2", "winter-1", "winter-2"]);
        assert_eq!(snapshot.season_data[&Season::Winter][0].id, "winter-1");
        assert_eq!(snapshot.season_data[&Season::Winter][0].filename, "1.mp3");
    }

    #[test]
    fn merge_records_errors_per_season() {
        let snapshot = CatalogSnapshot::merge(vec![
            result(Season::Autumn, &["a1"], None),
            result(Season::Winter, &[], Some("Download error: 503")),
        ]);

        assert_eq!(snapshot.errors.get(&Season::Winter).map(String::as_str), Some("Download error: 503"));
        assert_eq!(snapshot.season_data.get(&Season::Winter), Some(&vec![]));
        assert_eq!(snapshot.all_tracks.len(), 1);
    }

    #[test]
    fn new_state_is_loading_with_empty_seasons() {
        let state = CatalogState::new();
        assert!(state.loading());
        for season in Season::ALL {
            assert!(state.season_tracks(season).is_empty());
        }
    }

    #[test]
    fn publish_clears_loading_and_fills_missing_seasons() {
        let mut state = CatalogState::new();
        state.publish(CatalogSnapshot::merge(vec![result(Season::Spring, &["p1"], None)]));

        assert!(!state.loading());
        assert_eq!(state.season_tracks(Season::Spring).len(), 1);
        assert!(state.season_tracks(Season::Autumn).is_empty());
        assert_eq!(state.all_tracks().len(), 1);
    }

    #[test]
    fn playable_tracks_skip_unavailable_recordings() {
        let mut first = result(Season::Autumn, &["1", "2"], None);
        first.tracks[0].is_available = "FALSE".to_string();

        let mut state = CatalogState::new();
        state.publish(CatalogSnapshot::merge(vec![first]));

        let ids: Vec<String> = state.playable_tracks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["autumn-2"]);
        assert_eq!(state.all_tracks().len(), 2);
    }

    #[test]
    fn begin_load_raises_flag_and_keeps_tracks() {
        let mut state = CatalogState::new();
        state.publish(CatalogSnapshot::merge(vec![result(Season::Autumn, &["a1"], Some("x"))]));

        state.begin_load();
        assert!(state.loading());
        assert!(state.errors().is_empty());
        assert_eq!(state.all_tracks().len(), 1);
    }
}
