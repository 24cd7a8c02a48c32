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

//! The filter line.
//!
//! Pressing `/` focuses a single-line input whose contents filter the current
//! season's table as they are typed. `Enter` keeps the filter and returns
//! focus to the table, `Esc` clears it.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct FilterInput {
    active: bool,
    pub(crate) input: Input,
}

impl FilterInput {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning whether the event was consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char('/') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
                event_tx.send(AppEvent::FilterChanged(String::new()))?;
            }

            KeyCode::Enter => self.active = false,

            _ => {
                // Delegate everything else to the managed input component.
                if let Some(changed) = self.input.handle_event(event) {
                    if changed.value {
                        event_tx.send(AppEvent::FilterChanged(self.input.value().to_string()))?;
                    }
                }
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn filters(rx: &mpsc::Receiver<AppEvent>) -> Vec<String> {
        rx.try_iter()
            .filter_map(|e| match e {
                AppEvent::FilterChanged(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ignores_keys_until_activated() {
        let (tx, rx) = mpsc::channel();
        let mut filter = FilterInput::new();

        assert!(!filter.handle_event(&key(KeyCode::Char('a')), &tx).unwrap());
        assert!(filter.handle_event(&key(KeyCode::Char('/')), &tx).unwrap());
        assert!(filter.active());
        assert!(filters(&rx).is_empty());
    }

    #[test]
    fn typing_updates_the_filter() {
        let (tx, rx) = mpsc::channel();
        let mut filter = FilterInput::new();
        filter.handle_event(&key(KeyCode::Char('/')), &tx).unwrap();

        for c in "lag".chars() {
            filter.handle_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        filter.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert_eq!(filters(&rx), vec!["l", "la", "lag"]);
        assert!(!filter.active());
        assert_eq!(filter.input.value(), "lag");
    }

    #[test]
    fn escape_clears_the_filter() {
        let (tx, rx) = mpsc::channel();
        let mut filter = FilterInput::new();
        filter.handle_event(&key(KeyCode::Char('/')), &tx).unwrap();
        filter.handle_event(&key(KeyCode::Char('x')), &tx).unwrap();

        assert!(filter.handle_event(&key(KeyCode::Esc), &tx).unwrap());

        assert_eq!(filters(&rx), vec!["x", ""]);
        assert_eq!(filter.input.value(), "");
        assert!(!filter.active());
    }
}
