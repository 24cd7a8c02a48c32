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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the archive, the seasons the
//! recordings are grouped into and the tracks themselves, along with the raw
//! CSV row shape the tracks are mapped from.

pub mod catalog;
pub mod playlist;

use std::{collections::HashMap, fmt};

/// The availability flag value that marks a track as browsable.
pub const AVAILABLE: &str = "TRUE";

/// One of the four recording batches, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Autumn,
    Winter,
    Spring,
    Summer,
}

impl Season {
    /// All seasons in the fixed order used to build the global playlist.
    pub const ALL: [Season; 4] = [
        Season::Autumn,
        Season::Winter,
        Season::Spring,
        Season::Summer,
    ];

    /// The tag stored on tracks and used as the key for per-season state.
    pub fn tag(self) -> &'static str {
        match self {
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
        }
    }

    /// The 1-based position of the season, used to name its CSV resource.
    pub fn number(self) -> u8 {
        match self {
            Season::Autumn => 1,
            Season::Winter => 2,
            Season::Spring => 3,
            Season::Summer => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Season> {
        Season::ALL.into_iter().find(|s| s.tag() == tag)
    }

    pub fn next(self) -> Season {
        let idx = Season::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Season::ALL[(idx + 1) % Season::ALL.len()]
    }

    pub fn previous(self) -> Season {
        let idx = Season::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Season::ALL[(idx + Season::ALL.len() - 1) % Season::ALL.len()]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A playable recording from the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub place: String,
    pub date: String,
    pub filename: String,
    pub length: String,
    /// Absolute URL of the audio file.
    pub link: String,
    pub is_available: String,
    pub season: Option<String>,
}

impl Track {
    pub fn is_available(&self) -> bool {
        self.is_available == AVAILABLE
    }
}

/// One CSV data row keyed by the header names of the source document.
///
/// Fields keep the presence semantics of the source: a column missing from
/// the header is absent here, while a present but empty cell maps to an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    fields: HashMap<String, String>,
}

impl CsvRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
