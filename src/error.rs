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

//! Error types for catalog loading.
//!
//! These never escape the season loader; they are retried and then rendered
//! into the per-season error string shown by the user interface.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The CSV resource could not be fetched.
    #[error("Download error: {0}")]
    Download(String),

    /// The CSV resource was fetched but the parser reported problems with
    /// one or more rows.
    #[error("Parse errors: {}", .0.join(", "))]
    Parse(Vec<String>),
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Download(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_error_message() {
        let e = LoadError::Download("connection refused".into());
        assert_eq!(e.to_string(), "Download error: connection refused");
    }

    #[test]
    fn parse_errors_are_joined() {
        let e = LoadError::Parse(vec!["row 2: too few fields".into(), "row 7: invalid UTF-8".into()]);
        assert_eq!(
            e.to_string(),
            "Parse errors: row 2: too few fields, row 7: invalid UTF-8"
        );
    }
}
