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

use std::sync::mpsc::Sender;

use anyhow::Result;
use archivo::{browse::Column, model::catalog::CatalogState};
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{SeasonView, TrackTableAction},
    events::AppEvent,
};

impl SeasonView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        catalog: &CatalogState,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        if let Event::Key(key_event) = event {
            let handled = match key_event.code {
                KeyCode::Tab => {
                    self.next_season();
                    true
                }
                KeyCode::BackTab => {
                    self.previous_season();
                    true
                }
                KeyCode::Char('o') => {
                    self.cycle_sort(catalog);
                    true
                }
                KeyCode::F(1) => {
                    self.toggle_column(Column::Place);
                    true
                }
                KeyCode::F(2) => {
                    self.toggle_column(Column::Date);
                    true
                }
                KeyCode::F(3) => {
                    self.toggle_column(Column::Length);
                    true
                }
                KeyCode::F(4) => {
                    self.reset_columns();
                    true
                }
                _ => false,
            };

            if handled {
                return Ok(());
            }
        }

        let columns = &self.columns;
        let table = &mut self.tables[super::slot(self.season)];
        if let Some(action) = table.as_widget(columns, None).process_event(event) {
            match action {
                TrackTableAction::Activate(track) => {
                    event_tx.send(AppEvent::PlayTrack(track))?;
                }
            }
        }

        Ok(())
    }
}
