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

//! Playback engine state machine.
//!
//! Whatever audio engine is in use reports what it is doing as a stream of
//! [`EngineEvent`]s. [`Playback`] folds those events into an [`EngineState`]
//! using a fixed transition table and translates the interesting ones into
//! changes to the [`PlaylistStore`]:
//!
//! | From                              | Event    | To       |
//! |-----------------------------------|----------|----------|
//! | any                               | `Load`   | Loading  |
//! | any but Idle                      | `Unload` | Idle     |
//! | Loading                           | `Loaded` | Ready    |
//! | Ready, Paused                     | `Play`   | Playing  |
//! | Playing                           | `Pause`  | Paused   |
//! | Playing, Paused                   | `Finish` | Ended    |
//! | Loading, Ready, Playing, Paused   | `Fail`   | Errored  |
//!
//! Any other combination is ignored. Reaching `Ended` advances the playlist
//! and reaching `Errored` surfaces the engine's message; `Play`, `Pause` and
//! `Unload` keep the store's play flag in step with the engine.

use tracing::{debug, warn};

use crate::model::{Track, playlist::PlaylistStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
    Errored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// A new file was handed to the engine, replacing any previous one.
    Load,
    /// The engine has opened the file and knows its duration.
    Loaded,
    Play,
    Pause,
    /// Playback reached the end of the file.
    Finish,
    /// The engine could not load or play the file.
    Fail(String),
    /// Playback was stopped and the file released.
    Unload,
}

impl EngineState {
    /// Returns the state reached by applying `event`, or `None` if the event
    /// is not valid in this state.
    pub fn transition(self, event: &EngineEvent) -> Option<EngineState> {
        use EngineEvent as E;
        use EngineState as S;

        match (self, event) {
            (_, E::Load) => Some(S::Loading),
            (S::Idle, E::Unload) => None,
            (_, E::Unload) => Some(S::Idle),
            (S::Loading, E::Loaded) => Some(S::Ready),
            (S::Ready | S::Paused, E::Play) => Some(S::Playing),
            (S::Playing, E::Pause) => Some(S::Paused),
            (S::Playing | S::Paused, E::Finish) => Some(S::Ended),
            (S::Loading | S::Ready | S::Playing | S::Paused, E::Fail(_)) => Some(S::Errored),
            _ => None,
        }
    }
}

/// What the caller needs to do after an engine event was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reaction {
    None,
    /// The track ended and the playlist advanced; the engine should load
    /// this track next.
    Advance(Track),
    /// The engine failed; the message should be shown to the user.
    Notify(String),
}

#[derive(Debug)]
pub struct Playback {
    state: EngineState,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Applies an engine event and updates the store accordingly.
    pub fn handle(&mut self, event: EngineEvent, store: &mut PlaylistStore) -> Reaction {
        let Some(next) = self.state.transition(&event) else {
            debug!(state = ?self.state, ?event, "Ignoring engine event");
            return Reaction::None;
        };

        debug!(from = ?self.state, to = ?next, "Engine state changed");
        self.state = next;

        match event {
            EngineEvent::Load | EngineEvent::Loaded => Reaction::None,
            EngineEvent::Play => {
                store.set_is_playing(true);
                Reaction::None
            }
            EngineEvent::Pause | EngineEvent::Unload => {
                store.set_is_playing(false);
                Reaction::None
            }
            EngineEvent::Finish => {
                store.set_is_playing(false);
                match store.play_next() {
                    Some(track) => Reaction::Advance(track.clone()),
                    None => Reaction::None,
                }
            }
            EngineEvent::Fail(message) => {
                warn!(%message, "Playback failed");
                store.set_is_playing(false);
                Reaction::Notify(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            place: String::new(),
            date: String::new(),
            filename: format!("{}.mp3", id),
            length: String::new(),
            link: format!("https://cdn/{}.mp3", id),
            is_available: "TRUE".to_string(),
            season: None,
        }
    }

    fn store() -> PlaylistStore {
        let mut store = PlaylistStore::new();
        store.set_playlist(vec![track("1"), track("2")]);
        store.set_current_track(Some(track("2")));
        store
    }

    fn play_through(playback: &mut Playback, store: &mut PlaylistStore) {
        for event in [EngineEvent::Load, EngineEvent::Loaded, EngineEvent::Play] {
            assert_eq!(playback.handle(event, store), Reaction::None);
        }
    }

    #[test]
    fn transition_table() {
        use EngineEvent as E;
        use EngineState as S;

        assert_eq!(S::Idle.transition(&E::Load), Some(S::Loading));
        assert_eq!(S::Playing.transition(&E::Load), Some(S::Loading));
        assert_eq!(S::Loading.transition(&E::Loaded), Some(S::Ready));
        assert_eq!(S::Ready.transition(&E::Play), Some(S::Playing));
        assert_eq!(S::Playing.transition(&E::Pause), Some(S::Paused));
        assert_eq!(S::Paused.transition(&E::Play), Some(S::Playing));
        assert_eq!(S::Playing.transition(&E::Finish), Some(S::Ended));
        assert_eq!(S::Loading.transition(&E::Fail("x".into())), Some(S::Errored));
        assert_eq!(S::Paused.transition(&E::Unload), Some(S::Idle));

        assert_eq!(S::Idle.transition(&E::Play), None);
        assert_eq!(S::Loading.transition(&E::Play), None);
        assert_eq!(S::Idle.transition(&E::Unload), None);
        assert_eq!(S::Ended.transition(&E::Finish), None);
        assert_eq!(S::Errored.transition(&E::Fail("again".into())), None);
    }

    #[test]
    fn play_and_pause_track_the_play_flag() {
        let mut store = store();
        let mut playback = Playback::new();

        play_through(&mut playback, &mut store);
        assert_eq!(playback.state(), EngineState::Playing);
        assert!(store.is_playing());

        playback.handle(EngineEvent::Pause, &mut store);
        assert_eq!(playback.state(), EngineState::Paused);
        assert!(!store.is_playing());
    }

    #[test]
    fn finish_advances_with_wraparound() {
        let mut store = store();
        let mut playback = Playback::new();
        play_through(&mut playback, &mut store);

        let reaction = playback.handle(EngineEvent::Finish, &mut store);

        assert_eq!(reaction, Reaction::Advance(track("1")));
        assert_eq!(store.current_track().map(|t| t.id.as_str()), Some("1"));
        assert!(store.is_playing());
        assert_eq!(playback.state(), EngineState::Ended);
    }

    #[test]
    fn finish_without_navigable_track_does_nothing() {
        let mut store = PlaylistStore::new();
        let mut playback = Playback::new();
        play_through(&mut playback, &mut store);

        assert_eq!(playback.handle(EngineEvent::Finish, &mut store), Reaction::None);
        assert!(!store.is_playing());
    }

    #[test]
    fn failure_notifies_and_stops() {
        let mut store = store();
        let mut playback = Playback::new();
        playback.handle(EngineEvent::Load, &mut store);

        let reaction = playback.handle(EngineEvent::Fail("Failed to load audio".into()), &mut store);

        assert_eq!(reaction, Reaction::Notify("Failed to load audio".into()));
        assert_eq!(playback.state(), EngineState::Errored);
        assert!(!store.is_playing());

        playback.handle(EngineEvent::Load, &mut store);
        assert_eq!(playback.state(), EngineState::Loading);
    }

    #[test]
    fn ignored_events_leave_store_untouched() {
        let mut store = store();
        let mut playback = Playback::new();

        assert_eq!(playback.handle(EngineEvent::Play, &mut store), Reaction::None);
        assert_eq!(playback.handle(EngineEvent::Finish, &mut store), Reaction::None);
        assert_eq!(playback.state(), EngineState::Idle);
        assert!(!store.is_playing());
        assert_eq!(store.current_track().map(|t| t.id.as_str()), Some("2"));
    }
}
