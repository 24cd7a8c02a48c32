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

use archivo::browse::{Column, SortDirection};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::TrackTable,
    render::{Render, icons::ICON_PLAY},
    theme::Theme,
};

impl Render for TrackTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl TrackTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = self.columns.visible_columns();

        let rows = self.page_rows().iter().map(|track| {
            let is_current = self.current == Some(track.id.as_str());
            let marker = if is_current {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.table_current_fg))
            } else {
                Line::from("")
            };

            let mut cells = vec![Cell::from(marker)];
            cells.extend(columns.iter().map(|column| {
                let style = if is_current {
                    Style::default()
                        .fg(theme.table_current_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(column_fg(*column, theme))
                };
                Cell::from(Line::from(column.value(track)).style(style))
            }));

            Row::new(cells)
        });

        let mut widths = vec![Constraint::Length(2)];
        widths.extend(columns.iter().map(|c| column_width(*c)));

        let mut header = vec![Cell::from("")];
        header.extend(columns.iter().map(|c| Cell::from(self.header_title(*c))));

        let table = Table::new(rows, widths)
            .header(
                Row::new(header)
                    .style(
                        Style::default()
                            .fg(theme.accent_colour)
                            .add_modifier(Modifier::BOLD),
                    )
                    .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }

    fn header_title(&self, column: Column) -> String {
        match self.sort {
            Some(sort) if sort.column == column => {
                let arrow = match sort.direction {
                    SortDirection::Ascending => "\u{2191}",
                    SortDirection::Descending => "\u{2193}",
                };
                format!("{} {}", column.title(), arrow)
            }
            _ => column.title().to_string(),
        }
    }
}

fn column_fg(column: Column, theme: &Theme) -> Color {
    match column {
        Column::Place => theme.table_place_fg,
        Column::Date => theme.table_date_fg,
        Column::Filename => theme.table_filename_fg,
        Column::Length => theme.table_length_fg,
    }
}

fn column_width(column: Column) -> Constraint {
    match column {
        Column::Place => Constraint::Percentage(30),
        Column::Date => Constraint::Length(12),
        Column::Filename => Constraint::Percentage(50),
        Column::Length => Constraint::Length(10),
    }
}
