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

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) filter_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) live_colour: Color,
    pub(crate) muted_colour: Color,

    pub(crate) table_place_fg: Color,
    pub(crate) table_date_fg: Color,
    pub(crate) table_filename_fg: Color,
    pub(crate) table_length_fg: Color,
    pub(crate) table_current_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(22, 32, 30),
            accent_colour: Color::Rgb(142, 192, 124),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(34, 48, 44),
            filter_colour: Color::Rgb(235, 219, 178),
            error_colour: Color::Rgb(251, 73, 52),
            live_colour: Color::Rgb(239, 68, 68),
            muted_colour: Color::Rgb(124, 124, 124),

            table_place_fg: Color::Rgb(250, 189, 47),
            table_date_fg: Color::Rgb(162, 161, 166),
            table_filename_fg: Color::Rgb(255, 255, 255),
            table_length_fg: Color::Rgb(162, 161, 166),
            table_current_fg: Color::Rgb(142, 192, 124),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, for setting the terminal emulator's background.
    ///
    /// Returns `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(22, 32, 255)), Some("#1620ff".to_string()));
    }

    #[test]
    fn named_colours_have_no_hex() {
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
