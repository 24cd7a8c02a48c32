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

//! Recording wall-clock time.
//!
//! Recorder filenames end in the time the recording started, e.g.
//! `S4A09150_20230315_150854.mp3` started at 15:08:54. Adding the playback
//! position to that gives the time of day being heard.

const SECONDS_PER_DAY: u64 = 24 * 3600;

/// Shown when a filename carries no start time.
pub const UNKNOWN_TIME: &str = "--:--:--";

/// Returns the trailing `HHMMSS` digits of a filename, ignoring its extension.
pub fn extract_timestamp(filename: &str) -> Option<&str> {
    let stem = match filename.rfind('.') {
        Some(dot) if dot + 1 < filename.len() && !filename[dot + 1..].contains('/') => {
            &filename[..dot]
        }
        _ => filename,
    };

    let split = stem.len().checked_sub(6)?;
    if !stem.is_char_boundary(split) {
        return None;
    }

    let digits = &stem[split..];
    digits
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some(digits)
}

/// Seconds since midnight for an `HHMMSS` string.
fn parse_timestamp(timestamp: &str) -> Option<u64> {
    let field = |range: std::ops::Range<usize>| timestamp.get(range)?.parse::<u64>().ok();

    Some(field(0..2)? * 3600 + field(2..4)? * 60 + field(4..6)?)
}

/// The time of day at `elapsed_secs` into the recording, as `HH:MM:SS`.
///
/// Fractions of a second are dropped and the result wraps past midnight.
/// Filenames without a start time give [`UNKNOWN_TIME`].
pub fn real_world_time(filename: &str, elapsed_secs: f64) -> String {
    let Some(start) = extract_timestamp(filename).and_then(parse_timestamp) else {
        return UNKNOWN_TIME.to_string();
    };

    let elapsed = if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
        elapsed_secs.floor() as u64
    } else {
        0
    };

    let total = (start + elapsed) % SECONDS_PER_DAY;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trailing_digits_before_extension() {
        assert_eq!(extract_timestamp("S4A09150_20230315_150854.mp3"), Some("150854"));
        assert_eq!(extract_timestamp("rec_063000"), Some("063000"));
        assert_eq!(extract_timestamp("archive.v2_101010.wav"), Some("101010"));
    }

    #[test]
    fn no_timestamp() {
        assert_eq!(extract_timestamp(""), None);
        assert_eq!(extract_timestamp("a.mp3"), None);
        assert_eq!(extract_timestamp("rec_15085x.mp3"), None);
        assert_eq!(extract_timestamp("12345.mp3"), None);
    }

    #[test]
    fn adds_elapsed_whole_seconds() {
        assert_eq!(real_world_time("REC_150854.mp3", 0.0), "15:08:54");
        assert_eq!(real_world_time("REC_150854.mp3", 66.9), "15:10:00");
        assert_eq!(real_world_time("REC_150854.mp3", 3600.0), "16:08:54");
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(real_world_time("REC_235930.mp3", 45.0), "00:00:15");
    }

    #[test]
    fn unknown_without_timestamp() {
        assert_eq!(real_world_time("notes.mp3", 10.0), UNKNOWN_TIME);
        assert_eq!(real_world_time("", 10.0), UNKNOWN_TIME);
    }
}
