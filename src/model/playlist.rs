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

//! Playlist state and navigation.
//!
//! The [`PlaylistStore`] is the single source of truth for what is loaded,
//! what is selected and whether playback is wanted. The table view and the
//! player bar both read from it, and only write the current selection and the
//! play flag.
//!
//! Navigation is by track identity: the current track is located in the
//! playlist by `id`, so a selection made from a filtered or sorted view still
//! advances through the playlist in catalog order.

use tracing::debug;

use crate::model::Track;

#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlist: Vec<Track>,
    current: Option<Track>,
    is_playing: bool,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Replaces the playlist wholesale, leaving the selection untouched.
    pub fn set_playlist(&mut self, tracks: Vec<Track>) {
        debug!(count = tracks.len(), "Setting playlist");
        self.playlist = tracks;
    }

    /// Commits a freshly loaded catalog, but only into an empty playlist.
    ///
    /// Returns `true` if the playlist was replaced. Reloading the catalog
    /// therefore never duplicates entries in a populated playlist.
    pub fn commit_catalog(&mut self, tracks: Vec<Track>) -> bool {
        if !self.playlist.is_empty() {
            debug!("Playlist already populated, ignoring catalog commit");
            return false;
        }

        self.set_playlist(tracks);
        true
    }

    pub fn set_current_track(&mut self, track: Option<Track>) {
        debug!(filename = track.as_ref().map(|t| t.filename.as_str()), "Setting current track");
        self.current = track;
    }

    pub fn set_is_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Position of the current track in the playlist, matched by `id`.
    pub fn current_index(&self) -> Option<usize> {
        let current = self.current.as_ref()?;
        self.playlist.iter().position(|t| t.id == current.id)
    }

    /// Advances to the following track, wrapping to the first after the last.
    ///
    /// Returns `None` without changing anything when there is no current
    /// track, the playlist is empty, or the current track is not in the
    /// playlist. Advancing sets the play flag.
    pub fn play_next(&mut self) -> Option<&Track> {
        let len = self.playlist.len();
        let idx = self.navigable_index("next")?;
        let next_idx = if idx + 1 < len { idx + 1 } else { 0 };

        self.select_index(next_idx)
    }

    /// Steps back to the preceding track, wrapping to the last from the first.
    ///
    /// Has the same no-op conditions as [`PlaylistStore::play_next`].
    pub fn play_previous(&mut self) -> Option<&Track> {
        let len = self.playlist.len();
        let idx = self.navigable_index("previous")?;
        let previous_idx = if idx > 0 { idx - 1 } else { len - 1 };

        self.select_index(previous_idx)
    }

    fn navigable_index(&self, direction: &str) -> Option<usize> {
        if self.current.is_none() || self.playlist.is_empty() {
            debug!(direction, "Cannot navigate: no current track or empty playlist");
            return None;
        }

        let idx = self.current_index();
        if idx.is_none() {
            debug!(direction, "Cannot navigate: current track not in playlist");
        }
        idx
    }

    fn select_index(&mut self, idx: usize) -> Option<&Track> {
        let track = self.playlist.get(idx)?.clone();
        self.current = Some(track);
        self.is_playing = true;
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            place: "Bosque".to_string(),
            date: "2023-03-15".to_string(),
            filename: format!("REC_{}_150854.mp3", id),
            length: "1:00:00".to_string(),
            link: format!("https://cdn/audio/s01/{}.mp3", id),
            is_available: "TRUE".to_string(),
            season: Some("autumn".to_string()),
        }
    }

    fn store_with(ids: &[&str]) -> PlaylistStore {
        let mut store = PlaylistStore::new();
        store.set_playlist(ids.iter().map(|id| track(id)).collect());
        store
    }

    fn current_id(store: &PlaylistStore) -> Option<&str> {
        store.current_track().map(|t| t.id.as_str())
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut store = store_with(&["1", "2", "3"]);
        store.set_current_track(Some(track("2")));

        assert_eq!(store.play_next().map(|t| t.id.clone()), Some("3".into()));
        assert_eq!(store.play_next().map(|t| t.id.clone()), Some("1".into()));
        assert_eq!(store.play_previous().map(|t| t.id.clone()), Some("3".into()));
    }

    #[test]
    fn navigation_sets_play_flag() {
        let mut store = store_with(&["1", "2"]);
        store.set_current_track(Some(track("1")));
        assert!(!store.is_playing());

        store.play_next();
        assert!(store.is_playing());

        store.set_is_playing(false);
        store.play_previous();
        assert!(store.is_playing());
    }

    #[test]
    fn navigation_without_selection_is_noop() {
        let mut store = store_with(&["1", "2"]);

        assert!(store.play_next().is_none());
        assert!(store.play_previous().is_none());
        assert!(store.current_track().is_none());
        assert!(!store.is_playing());
    }

    #[test]
    fn navigation_on_empty_playlist_is_noop() {
        let mut store = PlaylistStore::new();
        store.set_current_track(Some(track("1")));

        assert!(store.play_next().is_none());
        assert_eq!(current_id(&store), Some("1"));
        assert!(!store.is_playing());
    }

    #[test]
    fn navigation_from_unknown_track_is_noop() {
        let mut store = store_with(&["1", "2"]);
        store.set_current_track(Some(track("99")));

        assert!(store.play_next().is_none());
        assert!(store.play_previous().is_none());
        assert_eq!(current_id(&store), Some("99"));
    }

    #[test]
    fn single_track_playlist_wraps_to_itself() {
        let mut store = store_with(&["1"]);
        store.set_current_track(Some(track("1")));

        assert_eq!(store.play_next().map(|t| t.id.clone()), Some("1".into()));
        assert_eq!(store.play_previous().map(|t| t.id.clone()), Some("1".into()));
    }

    #[test]
    fn set_playlist_keeps_selection() {
        let mut store = store_with(&["1", "2"]);
        store.set_current_track(Some(track("2")));

        store.set_playlist(vec![track("2"), track("3")]);
        assert_eq!(current_id(&store), Some("2"));
        assert_eq!(store.current_index(), Some(0));
    }

    #[test]
    fn commit_catalog_only_fills_empty_playlist() {
        let mut store = PlaylistStore::new();

        assert!(store.commit_catalog(vec![track("1"), track("2")]));
        assert!(!store.commit_catalog(vec![track("1"), track("2")]));
        assert_eq!(store.playlist().len(), 2);
    }
}
