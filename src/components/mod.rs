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

//! Stateful UI components.
//!
//! * [`TrackTable`]: A page of recordings with a row cursor.
//! * [`SeasonView`]: One tab per season, each with its own table.

mod season_view;
mod track_table;

pub(crate) use season_view::SeasonView;
pub(crate) use track_table::{TrackTable, TrackTableAction, TrackTableState};
