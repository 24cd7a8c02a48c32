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

use anyhow::Result;
use archivo::{
    model::{Season, Track, catalog::CatalogSnapshot},
    playback::{EngineEvent, EngineState, Reaction},
};
use tracing::{debug, error, info};

use crate::App;

pub(super) fn handle_catalog_loading(app: &mut App) {
    app.catalog.begin_load();
}

/// Publishes a finished catalog load.
///
/// The playlist is only filled by the first successful load, with the
/// recordings that are available, and the player is bound to its first track
/// without starting playback.
pub(super) fn handle_catalog_loaded(app: &mut App, snapshot: CatalogSnapshot) {
    app.catalog.publish(snapshot);
    app.season_view.refresh_all(&app.catalog);

    let playable = app.catalog.playable_tracks();
    if app.store.commit_catalog(playable) && app.store.current_track().is_none() {
        let first = app.store.playlist().first().cloned();
        app.store.set_current_track(first);
    }

    if !app.catalog.errors().is_empty() {
        app.status = Some(format!(
            "Failed to load {} of {} seasons",
            app.catalog.errors().len(),
            Season::ALL.len()
        ));
    }
}

pub(super) fn handle_filter_changed(app: &mut App, filter: String) {
    app.season_view.set_filter(filter, &app.catalog);
}

pub(super) fn handle_play_track(app: &mut App, track: Track) -> Result<()> {
    app.store.set_current_track(Some(track.clone()));
    start_track(app, &track)
}

pub(super) fn handle_play_next(app: &mut App) -> Result<()> {
    if let Some(track) = app.store.play_next().cloned() {
        start_track(app, &track)?;
    }

    Ok(())
}

pub(super) fn handle_play_previous(app: &mut App) -> Result<()> {
    if let Some(track) = app.store.play_previous().cloned() {
        start_track(app, &track)?;
    }

    Ok(())
}

/// Pauses or resumes the loaded recording, or starts the selected one when
/// nothing is loaded.
pub(super) fn handle_toggle_playback(app: &mut App) -> Result<()> {
    match app.playback.state() {
        EngineState::Idle | EngineState::Ended | EngineState::Errored => {
            if let Some(track) = app.store.current_track().cloned() {
                start_track(app, &track)?;
            }
        }
        _ => app.audio_player.toggle_pause()?,
    }

    Ok(())
}

pub(super) fn handle_engine_event(app: &mut App, event: EngineEvent) -> Result<()> {
    match app.playback.handle(event, &mut app.store) {
        Reaction::Advance(track) => {
            info!(id = %track.id, "Advancing to next recording");
            start_track(app, &track)?;
        }
        Reaction::Notify(message) => app.status = Some(message),
        Reaction::None => {}
    }

    Ok(())
}

fn start_track(app: &mut App, track: &Track) -> Result<()> {
    debug!(id = %track.id, link = %track.link, "Starting recording");

    app.status = None;
    app.player_time = None;
    app.player_duration = None;

    app.audio_player.play_url(&track.link)?;
    app.playback.handle(EngineEvent::Load, &mut app.store);

    Ok(())
}

pub(super) fn handle_duration_changed(app: &mut App, duration: u64) {
    app.player_duration = Some(duration);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds);
}

pub(super) fn handle_volume_changed(app: &mut App, volume: u32) {
    app.volume = Some(volume);
}

pub(super) fn handle_mute_changed(app: &mut App, muted: bool) {
    app.muted = muted;
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!(%message, "Background task failed");
    app.status = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}
