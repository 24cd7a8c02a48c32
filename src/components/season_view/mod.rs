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

mod event;
mod render;

use archivo::{
    browse::{Column, ColumnVisibility},
    model::{Season, catalog::CatalogState},
};

use crate::components::TrackTableState;

/// The tabbed season browser.
///
/// Every season keeps its own filter, sort, page and cursor; column
/// visibility is shared by all of them.
pub(crate) struct SeasonView {
    pub(crate) season: Season,
    tables: [TrackTableState; 4],
    pub(crate) columns: ColumnVisibility,
}

fn slot(season: Season) -> usize {
    usize::from(season.number()) - 1
}

impl SeasonView {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            season: Season::ALL[0],
            tables: std::array::from_fn(|_| TrackTableState::new(page_size)),
            columns: ColumnVisibility::default(),
        }
    }

    pub(crate) fn table(&self) -> &TrackTableState {
        &self.tables[slot(self.season)]
    }

    pub(crate) fn table_mut(&mut self) -> &mut TrackTableState {
        &mut self.tables[slot(self.season)]
    }

    /// Rebuilds every season's rows from a newly published catalog.
    pub(crate) fn refresh_all(&mut self, catalog: &CatalogState) {
        for season in Season::ALL {
            self.tables[slot(season)].refresh(catalog.season_tracks(season));
        }
    }

    pub(crate) fn next_season(&mut self) {
        self.season = self.season.next();
    }

    pub(crate) fn previous_season(&mut self) {
        self.season = self.season.previous();
    }

    /// Filters the current season's table, starting again from its first page.
    pub(crate) fn set_filter(&mut self, filter: String, catalog: &CatalogState) {
        let season = self.season;
        let table = self.table_mut();
        table.query.filter = filter;
        table.first_page();
        table.refresh(catalog.season_tracks(season));
    }

    pub(crate) fn cycle_sort(&mut self, catalog: &CatalogState) {
        let season = self.season;
        let table = self.table_mut();
        table.query.cycle_sort();
        table.refresh(catalog.season_tracks(season));
    }

    pub(crate) fn toggle_column(&mut self, column: Column) {
        self.columns.toggle(column);
    }

    pub(crate) fn reset_columns(&mut self) {
        self.columns.reset();
    }
}

#[cfg(test)]
mod tests {
    use archivo::model::{
        Track,
        catalog::{CatalogSnapshot, SeasonResult},
    };

    use super::*;

    fn track(id: &str, season: Season) -> Track {
        Track {
            id: id.to_string(),
            place: format!("place {}", id),
            date: String::new(),
            filename: format!("{}.mp3", id),
            length: String::new(),
            link: String::new(),
            is_available: "TRUE".to_string(),
            season: Some(season.tag().to_string()),
        }
    }

    fn catalog() -> CatalogState {
        let results = vec![
            SeasonResult {
                season: Season::Autumn,
                tracks: vec![track("a1", Season::Autumn), track("a2", Season::Autumn)],
                error: None,
            },
            SeasonResult {
                season: Season::Winter,
                tracks: vec![],
                error: Some("Download error: timeout".to_string()),
            },
            SeasonResult {
                season: Season::Spring,
                tracks: vec![track("p1", Season::Spring)],
                error: None,
            },
        ];

        let mut catalog = CatalogState::new();
        catalog.publish(CatalogSnapshot::merge(results));
        catalog
    }

    #[test]
    fn tables_are_per_season() {
        let catalog = catalog();
        let mut view = SeasonView::new(48);
        view.refresh_all(&catalog);

        assert_eq!(view.table().total(), 2);
        view.next_season();
        assert_eq!(view.season, Season::Winter);
        assert_eq!(view.table().total(), 0);
        view.next_season();
        assert_eq!(view.table().total(), 1);
    }

    #[test]
    fn filter_applies_to_current_season_only() {
        let catalog = catalog();
        let mut view = SeasonView::new(48);
        view.refresh_all(&catalog);

        view.set_filter("A2".to_string(), &catalog);
        assert_eq!(view.table().total(), 1);

        view.previous_season();
        view.previous_season();
        assert_eq!(view.season, Season::Spring);
        assert_eq!(view.table().total(), 1);
        assert_eq!(view.table().query.filter, "");
    }

    #[test]
    fn columns_are_shared() {
        let mut view = SeasonView::new(48);
        view.toggle_column(Column::Date);
        view.next_season();
        assert!(!view.columns.is_visible(Column::Date));

        view.reset_columns();
        assert!(view.columns.is_visible(Column::Date));
    }
}
