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
    browse::{ColumnVisibility, Pagination, Sort, TrackQuery},
    model::Track,
};
use ratatui::widgets::TableState;

/// Something the user did in a table that concerns the rest of the app.
#[derive(Debug)]
pub(crate) enum TrackTableAction {
    Activate(Track),
}

/// The rows a table shows and where its cursor is.
///
/// `rows` is the filtered and sorted result of the last refresh; the cursor
/// in `table_state` indexes into the current page of it.
pub(crate) struct TrackTableState {
    pub(crate) query: TrackQuery,
    pages: Pagination,
    rows: Vec<Track>,
    table_state: TableState,
}

impl TrackTableState {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            query: TrackQuery::default(),
            pages: Pagination::new(page_size),
            rows: vec![],
            table_state: TableState::new(),
        }
    }

    /// Re-applies the query to `tracks`, keeping the page and cursor in range.
    pub(crate) fn refresh(&mut self, tracks: &[Track]) {
        self.rows = self.query.apply(tracks);
        self.pages.clamp(self.rows.len());

        let page_len = self.pages.range(self.rows.len()).len();
        match self.table_state.selected() {
            _ if page_len == 0 => self.table_state.select(None),
            Some(i) if i >= page_len => self.table_state.select(Some(page_len - 1)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn pages(&self) -> &Pagination {
        &self.pages
    }

    pub(crate) fn first_page(&mut self) {
        self.pages.first_page();
        self.table_state.select(None);
    }

    pub(crate) fn as_widget<'a>(
        &'a mut self,
        columns: &'a ColumnVisibility,
        current: Option<&'a str>,
    ) -> TrackTable<'a> {
        TrackTable {
            rows: &self.rows,
            sort: self.query.sort,
            pages: &mut self.pages,
            table_state: &mut self.table_state,
            columns,
            current,
        }
    }
}

pub(crate) struct TrackTable<'a> {
    rows: &'a [Track],
    sort: Option<Sort>,
    pages: &'a mut Pagination,
    table_state: &'a mut TableState,
    columns: &'a ColumnVisibility,
    /// Id of the track bound to the player, marked in the table.
    current: Option<&'a str>,
}

impl<'a> TrackTable<'a> {
    fn page_rows(&self) -> &'a [Track] {
        let rows: &'a [Track] = self.rows;
        &rows[self.pages.range(rows.len())]
    }

    fn selected_track(&self) -> Option<&'a Track> {
        self.table_state
            .selected()
            .and_then(|i| self.page_rows().get(i))
    }

    fn goto_next(&mut self) {
        let len = self.page_rows().len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.page_rows().len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.page_rows().is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        let len = self.page_rows().len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    fn goto_page_forward(&mut self) {
        self.pages.next_page(self.rows.len());
        self.goto_first();
    }

    fn goto_page_back(&mut self) {
        self.pages.previous_page();
        self.goto_first();
    }
}
