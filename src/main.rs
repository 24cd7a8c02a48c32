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

//! # Archivo.
//!
//! A terminal player for a seasonal archive of field recordings.
//!
//! The catalog is published as one CSV document per season. Each is fetched
//! and mapped to playable tracks by the `archivo` library; this binary puts a
//! `ratatui` frontend on top of it and plays the recordings with MPV.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, applies events and
//!   renders the UI.
//! * The **Task Worker** loads the catalog, one thread per season.
//! * The **Player Worker** owns the MPV instance and reports its lifecycle.
//! * **Input and Tick Threads** feed key presses and periodic redraws.
//!
//! Workers never touch application state directly; they only send events to
//! the main thread over a `std::sync::mpsc` channel.

mod components;
mod events;
mod filter;
mod player;
mod render;
mod tasks;
mod theme;

use anyhow::{Context, Result};
use archivo::{
    config::{self, AppConfig},
    model::{catalog::CatalogState, playlist::PlaylistStore},
    playback::Playback,
    util,
};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    components::SeasonView,
    events::{AppEvent, process_events},
    filter::FilterInput,
    player::AudioPlayer,
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub audio_player: AudioPlayer,

    pub store: PlaylistStore,
    pub catalog: CatalogState,
    pub playback: Playback,

    pub season_view: SeasonView,
    pub filter: FilterInput,

    pub status: Option<String>,
    pub player_duration: Option<u64>,
    pub player_time: Option<f64>,
    pub volume: Option<u32>,
    pub muted: bool,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player = AudioPlayer::new(event_tx.clone(), config.volume)?;
        let season_view = SeasonView::new(config.page_size);

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            audio_player,
            store: PlaylistStore::new(),
            catalog: CatalogState::new(),
            playback: Playback::new(),
            season_view,
            filter: FilterInput::new(),
            status: None,
            player_duration: None,
            player_time: None,
            volume: None,
            muted: false,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, sets up the communication
/// channels and manages the terminal lifecycle around the main loop.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log output to the configured file, since the terminal belongs to the
/// UI. The level defaults to `info` and can be changed with `RUST_LOG`.
fn init_logging(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the background workers, requests the first catalog load and enters
/// the main event loop.
///
/// # Errors
///
/// Returns an error if the event loop hits an unrecoverable application
/// error, including a fatal error reported by a worker.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.task_tx
        .send(AppTask::LoadCatalog)
        .context("Failed to request catalog load")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
