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

use archivo::model::{Season, catalog::CatalogState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::{components::SeasonView, render::Render, theme::Theme};

impl SeasonView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        catalog: &CatalogState,
        current: Option<&str>,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_tabs(f, chunks[0], catalog, theme);

        let season = self.season;
        let body = Block::default().padding(Padding::horizontal(1));
        let body_area = body.inner(chunks[1]);

        if let Some(error) = catalog.season_error(season) {
            let message = Paragraph::new(vec![
                Line::from(format!("Failed to load season {}", season.title()))
                    .style(Style::default().fg(theme.error_colour).add_modifier(Modifier::BOLD)),
                Line::from(error.to_string()).style(Style::default().fg(theme.error_colour)),
            ])
            .block(body);
            f.render_widget(message, chunks[1]);
        } else if catalog.loading() && catalog.season_tracks(season).is_empty() {
            let message = Paragraph::new("Loading recordings...")
                .style(Style::default().fg(theme.border_colour))
                .block(body);
            f.render_widget(message, chunks[1]);
        } else if self.table().total() == 0 {
            let text = if self.table().query.filter.is_empty() {
                "No recordings".to_string()
            } else {
                format!("No recordings match \"{}\"", self.table().query.filter)
            };
            let message = Paragraph::new(text)
                .style(Style::default().fg(theme.border_colour))
                .block(body);
            f.render_widget(message, chunks[1]);
        } else {
            let columns = &self.columns;
            let table = &mut self.tables[super::slot(season)];
            table.as_widget(columns, current).draw(f, body_area, theme);
        }

        self.draw_footer(f, chunks[2], theme);
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect, catalog: &CatalogState, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(area);

        let titles = Season::ALL.iter().map(|season| {
            let count = catalog
                .season_tracks(*season)
                .iter()
                .filter(|t| t.is_available())
                .count();

            if catalog.season_error(*season).is_some() {
                Line::from(vec![
                    Span::raw(format!("{} ", season.title())),
                    Span::styled("!", Style::default().fg(theme.error_colour)),
                ])
            } else if catalog.loading() && count == 0 {
                Line::from(season.title())
            } else {
                Line::from(format!("{} ({})", season.title(), count))
            }
        });

        let selected = Season::ALL
            .iter()
            .position(|s| *s == self.season)
            .unwrap_or_default();

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(theme.border_colour))
            .highlight_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border_colour)),
            );
        f.render_widget(tabs, chunks[0]);

        if catalog.loading() {
            let loading = Paragraph::new("Loading...")
                .alignment(Alignment::Right)
                .style(Style::default().fg(theme.accent_colour));
            f.render_widget(loading, chunks[1]);
        }
    }

    fn draw_footer(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let table = self.table();
        let pages = table.pages();

        let mut text = format!(
            " Page {} of {} | {} recordings",
            pages.page() + 1,
            pages.page_count(table.total()),
            table.total()
        );
        if !table.query.filter.is_empty() {
            text.push_str(&format!(" | filter: {}", table.query.filter));
        }

        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(theme.border_colour)),
            area,
        );
    }
}
