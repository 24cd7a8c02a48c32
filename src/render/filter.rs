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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &str =
    "/ filter  Enter play  Space pause  n/p next/prev  Tab season  o sort  F1-F4 columns  r reload  q quit";

pub(crate) fn draw_filter(f: &mut Frame, area: Rect, app: &App) {
    let filter = &app.filter;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let line = if filter.active() {
        Paragraph::new(format!("/{}", filter.input.value())).style(
            Style::default()
                .fg(app.theme.filter_colour)
                .bg(app.theme.gauge_track_colour),
        )
    } else if let Some(status) = &app.status {
        Paragraph::new(status.as_str()).style(Style::default().fg(app.theme.error_colour))
    } else {
        Paragraph::new(KEY_HINTS).style(Style::default().fg(app.theme.border_colour))
    };

    f.render_widget(line, container[0]);

    if filter.active() {
        // One column for the leading '/'
        let cursor_x = container[0].x + 1 + filter.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
