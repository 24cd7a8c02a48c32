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

//! Browsing a season's tracks.
//!
//! This module provides the view-independent parts of the track table: which
//! tracks are shown (available ones matching the filter), in what order, which
//! page of them, and which columns.

use std::{cmp::Ordering, collections::HashSet, ops::Range};

use crate::model::Track;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Place,
    Date,
    Filename,
    Length,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Place, Column::Date, Column::Filename, Column::Length];

    pub fn title(self) -> &'static str {
        match self {
            Column::Place => "Place",
            Column::Date => "Date",
            Column::Filename => "Filename",
            Column::Length => "Length",
        }
    }

    /// The filename column identifies the recording and is always shown.
    pub fn hideable(self) -> bool {
        !matches!(self, Column::Filename)
    }

    pub fn value(self, track: &Track) -> &str {
        match self {
            Column::Place => &track.place,
            Column::Date => &track.date,
            Column::Filename => &track.filename,
            Column::Length => &track.length,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub column: Column,
    pub direction: SortDirection,
}

/// Filter and sort settings for one table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackQuery {
    pub filter: String,
    pub sort: Option<Sort>,
}

impl TrackQuery {
    /// Case-insensitive substring match against place, date, filename and
    /// length. An empty filter matches everything.
    pub fn matches(&self, track: &Track) -> bool {
        let needle = self.filter.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [Column::Place, Column::Date, Column::Filename, Column::Length]
            .iter()
            .any(|c| c.value(track).to_lowercase().contains(&needle))
    }

    /// The available tracks matching the filter, sorted if a sort is set and
    /// in source order otherwise.
    pub fn apply(&self, tracks: &[Track]) -> Vec<Track> {
        let mut rows: Vec<Track> = tracks
            .iter()
            .filter(|t| t.is_available() && self.matches(t))
            .cloned()
            .collect();

        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(sort.column.value(a), sort.column.value(b));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows
    }

    /// Steps through unsorted, then each column ascending and descending.
    pub fn cycle_sort(&mut self) {
        self.sort = match self.sort {
            None => Some(Sort {
                column: Column::ALL[0],
                direction: SortDirection::Ascending,
            }),
            Some(Sort {
                column,
                direction: SortDirection::Ascending,
            }) => Some(Sort {
                column,
                direction: SortDirection::Descending,
            }),
            Some(Sort {
                column,
                direction: SortDirection::Descending,
            }) => Column::ALL
                .iter()
                .position(|c| *c == column)
                .and_then(|i| Column::ALL.get(i + 1))
                .map(|&column| Sort {
                    column,
                    direction: SortDirection::Ascending,
                }),
        };
    }
}

fn compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Fixed-size paging over a result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    size: usize,
}

impl Pagination {
    pub fn new(size: usize) -> Self {
        Self {
            page: 0,
            size: size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of pages for `total` rows; an empty result still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size).max(1)
    }

    /// Pulls the page index back in range after the result set shrank.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total) - 1);
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    /// Moves to the page containing row `index`.
    pub fn show_row(&mut self, index: usize) {
        self.page = index / self.size;
    }

    /// Row indices of the current page within a result of `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.size).min(total);
        let end = (start + self.size).min(total);
        start..end
    }
}

/// Which table columns are hidden, shared by every season's table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: HashSet<Column>,
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    /// Toggles a column, ignoring columns that cannot be hidden.
    pub fn toggle(&mut self, column: Column) {
        if !column.hideable() {
            return;
        }

        if !self.hidden.remove(&column) {
            self.hidden.insert(column);
        }
    }

    pub fn reset(&mut self) {
        self.hidden.clear();
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, place: &str, date: &str, available: &str) -> Track {
        Track {
            id: id.to_string(),
            place: place.to_string(),
            date: date.to_string(),
            filename: format!("S4A_{}_150854.mp3", id),
            length: "1:00:00".to_string(),
            link: String::new(),
            is_available: available.to_string(),
            season: None,
        }
    }

    fn ids(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.id.as_str()).collect()
    }

    fn sample() -> Vec<Track> {
        vec![
            track("1", "Laguna", "2023-03-15", "TRUE"),
            track("2", "bosque", "2023-03-14", "TRUE"),
            track("3", "Cerro", "2023-03-16", "FALSE"),
            track("4", "Arroyo", "2023-03-13", "TRUE"),
        ]
    }

    #[test]
    fn unavailable_tracks_are_hidden() {
        let rows = TrackQuery::default().apply(&sample());
        assert_eq!(ids(&rows), vec!["1", "2", "4"]);
    }

    #[test]
    fn filter_is_case_insensitive_across_columns() {
        let mut query = TrackQuery::default();

        query.filter = "LAGUNA".to_string();
        assert_eq!(ids(&query.apply(&sample())), vec!["1"]);

        query.filter = "03-14".to_string();
        assert_eq!(ids(&query.apply(&sample())), vec!["2"]);

        query.filter = "s4a_4".to_string();
        assert_eq!(ids(&query.apply(&sample())), vec!["4"]);

        query.filter = "cerro".to_string();
        assert!(query.apply(&sample()).is_empty());
    }

    #[test]
    fn sorts_by_column_in_both_directions() {
        let mut query = TrackQuery {
            filter: String::new(),
            sort: Some(Sort {
                column: Column::Place,
                direction: SortDirection::Ascending,
            }),
        };
        assert_eq!(ids(&query.apply(&sample())), vec!["4", "2", "1"]);

        query.sort = Some(Sort {
            column: Column::Date,
            direction: SortDirection::Descending,
        });
        assert_eq!(ids(&query.apply(&sample())), vec!["1", "2", "4"]);
    }

    #[test]
    fn cycle_sort_visits_every_column_then_unsorted() {
        let mut query = TrackQuery::default();
        let mut seen = vec![];

        for _ in 0..Column::ALL.len() * 2 {
            query.cycle_sort();
            seen.push(query.sort.expect("sort set"));
        }
        query.cycle_sort();

        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0].column, Column::Place);
        assert_eq!(seen[1].direction, SortDirection::Descending);
        assert_eq!(seen[7].column, Column::Length);
        assert_eq!(query.sort, None);
    }

    #[test]
    fn pagination_ranges_and_clamping() {
        let mut pages = Pagination::new(48);
        assert_eq!(pages.page_count(0), 1);
        assert_eq!(pages.page_count(48), 1);
        assert_eq!(pages.page_count(49), 2);

        pages.next_page(100);
        pages.next_page(100);
        pages.next_page(100);
        assert_eq!(pages.page(), 2);
        assert_eq!(pages.range(100), 96..100);

        pages.clamp(50);
        assert_eq!(pages.page(), 1);

        pages.previous_page();
        pages.previous_page();
        assert_eq!(pages.page(), 0);

        pages.show_row(60);
        assert_eq!(pages.page(), 1);
    }

    #[test]
    fn filename_column_cannot_be_hidden() {
        let mut columns = ColumnVisibility::default();

        columns.toggle(Column::Filename);
        columns.toggle(Column::Date);
        assert_eq!(
            columns.visible_columns(),
            vec![Column::Place, Column::Filename, Column::Length]
        );

        columns.toggle(Column::Date);
        assert!(columns.is_visible(Column::Date));

        columns.toggle(Column::Length);
        columns.reset();
        assert_eq!(columns.visible_columns(), Column::ALL.to_vec());
    }
}
