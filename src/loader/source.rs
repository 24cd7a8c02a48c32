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

//! CSV retrieval and parsing.
//!
//! A [`CsvSource`] turns a URL into a [`CsvDocument`]: the header-keyed rows
//! plus any per-row problems the parser noticed. Download failures are
//! reported as an error, parse problems are not, so the caller can decide
//! whether a document with bad rows is worth retrying.
//!
//! [`HttpCsvSource`] is the production implementation; tests substitute their
//! own.

use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::{CACHE_CONTROL, PRAGMA},
};
use tracing::debug;

use crate::{error::LoadError, model::CsvRow};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A parsed CSV resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvDocument {
    pub rows: Vec<CsvRow>,
    pub errors: Vec<String>,
}

/// Something that can fetch and parse a CSV resource.
pub trait CsvSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<CsvDocument, LoadError>;
}

/// Fetches CSV resources over HTTP, bypassing intermediate caches.
pub struct HttpCsvSource {
    http: Client,
}

impl HttpCsvSource {
    pub fn new() -> Result<Self, LoadError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!("Archivo/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }
}

impl CsvSource for HttpCsvSource {
    fn fetch(&self, url: &str) -> Result<CsvDocument, LoadError> {
        debug!(url = %url, "Fetching CSV");

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Download(format!("HTTP {} for {}", status, url)));
        }

        let text = response.text()?;
        Ok(parse_csv(&text))
    }
}

/// Parses CSV text using its first line as the header.
///
/// Blank lines are skipped. Rows whose field count differs from the header
/// are still returned (missing trailing fields are absent, extra fields are
/// dropped) and each one is recorded as an error.
pub fn parse_csv(text: &str) -> CsvDocument {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            return CsvDocument {
                rows: vec![],
                errors: vec![e.to_string()],
            };
        }
    };

    let mut document = CsvDocument::default();

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                document.errors.push(e.to_string());
                continue;
            }
        };

        if record.len() != headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let kind = if record.len() < headers.len() {
                "Too few fields"
            } else {
                "Too many fields"
            };
            document.errors.push(format!(
                "{}: expected {} fields but parsed {} (line {})",
                kind,
                headers.len(),
                record.len(),
                line
            ));
        }

        document
            .rows
            .push(headers.iter().zip(record.iter()).collect());
    }

    document
}
