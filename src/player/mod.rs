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

//! Audio playback control.
//!
//! [`AudioPlayer`] is the handle the UI uses to drive playback of remote
//! recordings. Commands are forwarded to a background worker that owns the
//! single MPV instance; what the engine does in response comes back to the
//! main loop as [`AppEvent`]s.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{events::AppEvent, player::commands::AudioPlayerCommand};

/// A handle to the audio playback engine.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - Where engine events, progress updates and errors are
    ///   sent.
    /// * `volume` - The initial volume, 0 to 100.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>, volume: u32) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx, volume);

        Ok(Self { command_tx })
    }

    /// Loads a recording, replacing whatever was loaded before, and starts
    /// playing it as soon as it is ready.
    pub(crate) fn play_url(&self, url: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::PlayUrl(url.to_string()))?;
        Ok(())
    }

    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::TogglePause)?;
        Ok(())
    }

    /// Stops playback and unloads the recording.
    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Stop)?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::ToggleMute)?;
        Ok(())
    }

    /// Moves the playback position by `delta` seconds.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Seek(delta))?;
        Ok(())
    }
}
