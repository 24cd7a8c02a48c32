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
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{App, events::AppEvent, tasks::AppTask};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const SEEK_DELTA: i32 = 5;

/// Routes a key press to whichever part of the interface wants it.
///
/// Keys are offered in order to:
///
/// * **Filter Input**: While the filter line is open it consumes every key.
/// * **Season View**: Tab switching, sorting, column toggles and the table
///   cursor.
/// * **Global Keys**: Playback, seeking, volume, reloading and quitting.
///
/// Key releases are ignored.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the main loop or a command
/// cannot be sent to a background worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    let event = Event::Key(key);
    if app.filter.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    app.season_view
        .process_event(&event, &app.catalog, &app.event_tx)?;

    process_global_key_event(app, key)?;
    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('n'), _) => app.event_tx.send(AppEvent::PlayNext)?,
        (KeyCode::Char('p'), _) => app.event_tx.send(AppEvent::PlayPrevious)?,
        (KeyCode::Char(' '), _) => app.event_tx.send(AppEvent::TogglePlayback)?,

        (KeyCode::Char(','), _) => app.audio_player.seek(-SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.audio_player.seek(SEEK_DELTA)?,
        (KeyCode::Char('s'), _) => app.audio_player.stop()?,
        (KeyCode::Char('-'), _) => app.audio_player.adjust_volume(-FINE_VOLUME_DELTA)?,
        (KeyCode::Char('='), _) => app.audio_player.adjust_volume(FINE_VOLUME_DELTA)?,
        (KeyCode::Char('_'), _) => app.audio_player.adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('+'), _) => app.audio_player.adjust_volume(VOLUME_DELTA)?,
        (KeyCode::Char('m'), _) => app.audio_player.toggle_mute()?,

        (KeyCode::Char('r'), _) => app.task_tx.send(AppTask::LoadCatalog)?,

        _ => {}
    }

    Ok(())
}
