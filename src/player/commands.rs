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

//! MPV-backed playback worker.
//!
//! The worker alternates between draining queued [`AudioPlayerCommand`]s and
//! waiting briefly for MPV events. MPV's own lifecycle is reported to the UI
//! as [`EngineEvent`]s:
//!
//! * `FileLoaded` becomes `Loaded`, followed by `Play` unless paused.
//! * Changes of the `pause` property become `Play` or `Pause`.
//! * An end of file becomes `Finish`, `Fail` or, after an explicit stop,
//!   `Unload`. Files replaced by a new load end silently.

use anyhow::{Context, Result};
use archivo::playback::EngineEvent;
use mpv::{EndFileReason, Format};
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{debug, warn};

use crate::events::AppEvent;

const LOAD_FAILED: &str = "Failed to load audio";
const PLAY_FAILED: &str = "Failed to play audio";

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    PlayUrl(String),
    TogglePause,
    Seek(i32),
    Stop,
    AdjustVolume(i32),
    ToggleMute,
}

/// Engine-side bookkeeping needed to translate MPV events.
#[derive(Default)]
struct WorkerState {
    is_paused: bool,
    stop_requested: bool,
}

pub(crate) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
    volume: u32,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx, volume) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

fn audio_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
    volume: u32,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder
            .set_option("volume", i64::from(volume.min(100)))
            .context("Failed to set initial volume")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<f64>("volume", 0)
        .context("Failed to observe volume")?;
    handler
        .observe_property::<bool>("mute", 0)
        .context("Failed to observe mute")?;

    let mut state = WorkerState::default();

    loop {
        process_commands(&mut handler, &command_rx, &mut state, &event_tx)?;
        process_mpv_events(&mut handler, &mut state, &event_tx)?;
    }
}

fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<AudioPlayerCommand>,
    state: &mut WorkerState,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        match command {
            AudioPlayerCommand::PlayUrl(url) => {
                debug!(url = %url, "Loading recording");
                state.stop_requested = false;

                if let Err(e) = handler.command(&["loadfile", &url, "replace"]) {
                    warn!(url = %url, error = ?e, "MPV rejected loadfile");
                    event_tx
                        .send(AppEvent::Engine(EngineEvent::Fail(LOAD_FAILED.to_string())))
                        .context("Failed to send engine event")?;
                    continue;
                }

                if let Err(e) = handler.set_property("pause", false) {
                    warn!(error = ?e, "Failed to unpause");
                    event_tx
                        .send(AppEvent::Engine(EngineEvent::Fail(PLAY_FAILED.to_string())))
                        .context("Failed to send engine event")?;
                }
            }
            AudioPlayerCommand::TogglePause => {
                handler
                    .command(&["cycle", "pause"])
                    .context("Failed to toggle pause")?;
            }
            AudioPlayerCommand::Seek(delta) => {
                // Seeking with nothing loaded is rejected by MPV, and harmless.
                if let Err(e) = handler.command(&["seek", &delta.to_string(), "relative"]) {
                    debug!(error = ?e, "Seek ignored");
                }
            }
            AudioPlayerCommand::Stop => {
                state.stop_requested = true;
                handler.command(&["stop"]).context("Failed to stop")?;
            }
            AudioPlayerCommand::AdjustVolume(delta) => {
                handler
                    .command(&["add", "volume", &delta.to_string()])
                    .context("Failed to adjust volume")?;
            }
            AudioPlayerCommand::ToggleMute => {
                handler
                    .command(&["cycle", "mute"])
                    .context("Failed to toggle mute")?;
            }
        }
    }

    Ok(())
}

fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(0.05) else {
        return Ok(());
    };

    let app_events = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("duration", Format::Double(duration)) => {
                vec![AppEvent::DurationChanged(duration as u64)]
            }
            ("pause", Format::Flag(pause)) => {
                state.is_paused = pause;
                let event = if pause {
                    EngineEvent::Pause
                } else {
                    EngineEvent::Play
                };
                vec![AppEvent::Engine(event)]
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                vec![AppEvent::TimeChanged(seconds)]
            }
            ("volume", Format::Double(volume)) => {
                vec![AppEvent::VolumeChanged(volume.round() as u32)]
            }
            ("mute", Format::Flag(muted)) => vec![AppEvent::MuteChanged(muted)],
            _ => vec![],
        },
        mpv::Event::FileLoaded => {
            let mut events = vec![AppEvent::Engine(EngineEvent::Loaded)];
            if !state.is_paused {
                events.push(AppEvent::Engine(EngineEvent::Play));
            }
            events
        }
        mpv::Event::EndFile(result) => {
            let event = match result {
                Ok(EndFileReason::MPV_END_FILE_REASON_EOF) => Some(EngineEvent::Finish),
                Ok(EndFileReason::MPV_END_FILE_REASON_ERROR) => {
                    warn!("MPV reported an error at end of file");
                    Some(EngineEvent::Fail(LOAD_FAILED.to_string()))
                }
                Ok(EndFileReason::MPV_END_FILE_REASON_STOP) if state.stop_requested => {
                    state.stop_requested = false;
                    Some(EngineEvent::Unload)
                }
                // Replaced by a new load, or shutting down
                Ok(_) => None,
                Err(e) => {
                    warn!(error = ?e, "MPV failed to play recording");
                    Some(EngineEvent::Fail(LOAD_FAILED.to_string()))
                }
            };
            event.map(AppEvent::Engine).into_iter().collect()
        }
        _ => vec![],
    };

    for event in app_events {
        event_tx.send(event).context("Failed to send event")?;
    }

    Ok(())
}
