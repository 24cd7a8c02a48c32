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

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::{TrackTable, TrackTableAction};

impl TrackTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TrackTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(),

            (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.goto_page_forward()
            }
            (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.goto_page_back()
            }

            (KeyCode::Enter, _) => {
                return self
                    .selected_track()
                    .map(|track| TrackTableAction::Activate(track.clone()));
            }

            _ => {}
        }

        None
    }
}
