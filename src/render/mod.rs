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

//! Top-level frame layout.
//!
//! The screen is split into the season browser, the player panel and a single
//! line for the filter input or status messages.

mod filter;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App,
    render::{filter::draw_filter, player::draw_player},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Draws one frame of the user interface.
///
/// The current track is passed to the season view so its row can be marked
/// wherever it appears.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the
///   tables to keep their cursor and page in step with what is shown.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: browser, player, filter/status line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    let current = app.store.current_track().map(|t| t.id.as_str());
    app.season_view
        .draw(f, outer[0], &app.catalog, current, &app.theme);

    draw_player(f, outer[1], app);

    draw_filter(f, outer[2], app);
}
