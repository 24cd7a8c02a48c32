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

//! Mapping of raw CSV rows to tracks.

use crate::model::{AVAILABLE, CsvRow, Season, Track};

// Header names as they appear in the archive CSV files, misspellings included.
const ID: &str = "id";
const PLACE: &str = "place";
const DATE: &str = "date";
const FILENAME: &str = "filename";
const LENGTH: &str = "lenght";
const LINK: &str = "link";
const AVAILABLE_MISSPELT: &str = "isAvalable";
const AVAILABLE_KEY: &str = "isAvailable";

/// Converts one CSV row into a [`Track`].
///
/// Returns `None` for rows without an `id` or `filename`, which covers the
/// blank and partial rows the source files contain.
///
/// # Arguments
///
/// * `row` - The row, keyed by CSV header name.
/// * `base_url` - Prefix prepended verbatim to the row's `link` fragment.
/// * `season` - The season the row was loaded for, if known.
pub fn map_row(row: &CsvRow, base_url: &str, season: Option<Season>) -> Option<Track> {
    let id = row.get(ID).filter(|s| !s.is_empty())?;
    let filename = row.get(FILENAME).filter(|s| !s.is_empty())?;

    let field = |key: &str| row.get(key).unwrap_or_default().to_string();

    let is_available = row
        .get(AVAILABLE_MISSPELT)
        .or_else(|| row.get(AVAILABLE_KEY))
        .unwrap_or(AVAILABLE);

    Some(Track {
        id: id.to_string(),
        place: field(PLACE),
        date: field(DATE),
        filename: filename.to_string(),
        length: field(LENGTH),
        link: format!("{}{}", base_url, row.get(LINK).unwrap_or_default()),
        is_available: is_available.to_string(),
        season: season.map(|s| s.tag().to_string()),
    })
}

/// Maps every row, dropping rejected rows and keeping source order.
pub fn map_rows<'a, I>(rows: I, base_url: &str, season: Option<Season>) -> Vec<Track>
where
    I: IntoIterator<Item = &'a CsvRow>,
{
    rows.into_iter()
        .filter_map(|row| map_row(row, base_url, season))
        .collect()
}
