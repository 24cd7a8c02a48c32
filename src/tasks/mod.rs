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

//! Background application tasks.
//!
//! Loading the catalog blocks on the network for up to several retry delays,
//! so it runs on a dedicated worker that receives [`AppTask`] requests and
//! reports back to the main loop via [`AppEvent`]s.

use anyhow::{Context, Result};
use archivo::{
    config::AppConfig,
    loader::{self, SeasonLoader, source::HttpCsvSource},
};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::events::AppEvent;

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadCatalog,
}

pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let loader = match HttpCsvSource::new() {
            Ok(source) => SeasonLoader::new(source, &config.base_url, config.retry_policy()),
            Err(e) => {
                let _ = event_tx.send(AppEvent::FatalError(format!(
                    "Failed to initialise HTTP client: {}",
                    e
                )));
                return;
            }
        };

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                loader: &loader,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    loader: &'a SeasonLoader<HttpCsvSource>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadCatalog => load_catalog(ctx),
    }
}

fn load_catalog(ctx: &TaskContext) -> Result<()> {
    ctx.event_tx
        .send(AppEvent::CatalogLoading)
        .context("Failed to send catalog loading event")?;

    let sources = ctx.config.season_sources();
    let snapshot = loader::load_catalog(ctx.loader, &sources);

    ctx.event_tx
        .send(AppEvent::CatalogLoaded(snapshot))
        .context("Failed to send catalog")?;

    Ok(())
}
