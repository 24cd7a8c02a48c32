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

//! Application events and the main event loop.
//!
//! Everything that changes application state arrives here as an [`AppEvent`]
//! on a single channel: key presses from the input thread, catalog results
//! from the task worker, and engine events from the playback worker. Events
//! are applied one at a time on the main thread and the frame is redrawn
//! after each.
//!
//! # Organization
//!
//! * `handlers`: State changes for each event.
//! * `key_handlers`: Key bindings.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use archivo::{
    model::{Track, catalog::CatalogSnapshot},
    playback::EngineEvent,
};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    CatalogLoading,
    CatalogLoaded(CatalogSnapshot),

    FilterChanged(String),

    PlayTrack(Track),
    PlayNext,
    PlayPrevious,
    TogglePlayback,

    Engine(EngineEvent),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    MuteChanged(bool),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, applying events and redrawing the UI.
///
/// This function loops until the user quits or the event channel is closed.
///
/// # Errors
///
/// Returns an error if a handler fails, the terminal cannot be drawn, or a
/// worker reports a fatal error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => return Err(anyhow!(message)),

            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::CatalogLoading => handle_catalog_loading(app),
            AppEvent::CatalogLoaded(snapshot) => handle_catalog_loaded(app, snapshot),
            AppEvent::FilterChanged(filter) => handle_filter_changed(app, filter),
            AppEvent::PlayTrack(track) => handle_play_track(app, track)?,
            AppEvent::PlayNext => handle_play_next(app)?,
            AppEvent::PlayPrevious => handle_play_previous(app)?,
            AppEvent::TogglePlayback => handle_toggle_playback(app)?,
            AppEvent::Engine(engine_event) => handle_engine_event(app, engine_event)?,
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
            AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
            AppEvent::MuteChanged(muted) => handle_mute_changed(app, muted),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}
