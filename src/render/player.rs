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

use archivo::{
    model::Season,
    playback::EngineState,
    util::{
        format::{format_time, format_volume},
        timestamp::real_world_time,
    },
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_ERROR, ICON_LIVE, ICON_LOADING, ICON_PAUSE, ICON_PLAY, ICON_STOP},
};

fn state_icon(state: EngineState) -> &'static str {
    match state {
        EngineState::Playing => ICON_PLAY,
        EngineState::Paused => ICON_PAUSE,
        EngineState::Loading | EngineState::Ready => ICON_LOADING,
        EngineState::Errored => ICON_ERROR,
        EngineState::Idle | EngineState::Ended => ICON_STOP,
    }
}

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let Some(track) = app.store.current_track() else {
        let idle = Paragraph::new("No recording selected")
            .style(Style::default().fg(app.theme.border_colour));
        f.render_widget(idle, chunks[0]);
        return;
    };

    let track_line = Line::from(vec![
        Span::styled(format!(" {} ", state_icon(app.playback.state())), bold.fg(Color::White)),
        Span::styled(track.place.as_str(), bold.fg(app.theme.accent_colour)),
        Span::raw("  "),
        Span::styled(track.filename.as_str(), Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    let duration = app.player_duration.unwrap_or(0);
    let time = app.player_time.unwrap_or(0.0);
    let elapsed = time as u64;
    let remaining = duration.saturating_sub(elapsed);

    let time_line = Line::from(vec![
        Span::styled(format_time(elapsed), bold.fg(app.theme.accent_colour)),
        Span::styled(" / ", bold.fg(Color::White)),
        Span::styled(format_time(duration), bold.fg(app.theme.accent_colour)),
        Span::styled(" (-", bold.fg(Color::White)),
        Span::styled(format_time(remaining), bold.fg(app.theme.accent_colour)),
        Span::styled(")", bold.fg(Color::White)),
    ]);
    f.render_widget(
        Paragraph::new(time_line).alignment(Alignment::Right),
        info_chunks[1],
    );

    // Wall-clock time of the recording at the current position
    let mut clock = vec![
        Span::styled("Hora: ", Style::default().fg(app.theme.border_colour)),
        Span::styled(real_world_time(&track.filename, time), bold.fg(Color::White)),
    ];
    if !track.date.is_empty() {
        clock.push(Span::styled(
            format!("  {}", track.date),
            Style::default().fg(app.theme.border_colour),
        ));
    }
    if app.store.is_playing() {
        clock.push(Span::styled(
            format!("  {}", ICON_LIVE),
            Style::default().fg(app.theme.live_colour),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(clock)), chunks[1]);

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[2]);

    let season = track
        .season
        .as_deref()
        .and_then(Season::from_tag)
        .map(Season::title)
        .unwrap_or_default();
    let position_text = match app.store.current_index() {
        Some(index) => format!(
            "{}  {} of {}",
            season,
            index + 1,
            app.store.playlist().len()
        ),
        None => season.to_string(),
    };
    f.render_widget(
        Paragraph::new(position_text).style(Style::default().fg(app.theme.border_colour)),
        control_chunks[0],
    );

    let volume = app.volume.unwrap_or(app.config.volume);
    let vol_ratio = (f64::from(volume) / 100.0).clamp(0.0, 1.0);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(control_chunks[1]);

    let volume_fg = if app.muted {
        app.theme.muted_colour
    } else {
        app.theme.accent_colour
    };
    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(volume_fg).bg(app.theme.gauge_track_colour))
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[0]);

    let volume_label = Paragraph::new(format_volume(volume, app.muted))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::White));
    f.render_widget(volume_label, volume_layout[1]);

    let position = if duration > 0 {
        (time / duration as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}
