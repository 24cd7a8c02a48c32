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

/// Formats a duration in seconds as `MM:SS`, or `H:MM:SS` once it reaches an
/// hour.
///
/// # Examples
///
/// ```
/// use archivo::util::format::format_time;
///
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(3725), "1:02:05");
/// ```
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// Formats a 0 to 100 volume for the status bar.
pub fn format_volume(volume: u32, muted: bool) -> String {
    if muted {
        "muted".to_string()
    } else {
        format!("{}%", volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_durations_have_no_hours() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(3599), "59:59");
    }

    #[test]
    fn long_durations_show_hours() {
        assert_eq!(format_time(3600), "1:00:00");
        assert_eq!(format_time(7322), "2:02:02");
    }

    #[test]
    fn volume_label() {
        assert_eq!(format_volume(77, false), "77%");
        assert_eq!(format_volume(77, true), "muted");
    }
}
