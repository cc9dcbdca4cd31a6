//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! The fixed 99-entry color palette addressed by color codes.

use crate::consts::{BASE_COLORS, PALETTE_SIZE};
use std::fmt;

/// A 24-bit color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Formats the color as `#RRGGBB`, the form toolkit tag properties expect.
    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Palette entries `0..=15` are the classic colors, `16..=98` the extended ramp.
pub static PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb(0xFF, 0xFF, 0xFF), // white
    Rgb(0x00, 0x00, 0x00), // black
    Rgb(0x00, 0x00, 0x7F), // navy
    Rgb(0x00, 0x93, 0x00), // green
    Rgb(0xFF, 0x00, 0x00), // red
    Rgb(0x7F, 0x00, 0x00), // maroon
    Rgb(0x9C, 0x00, 0x9C), // purple
    Rgb(0xFC, 0x7F, 0x00), // orange
    Rgb(0xFF, 0xFF, 0x00), // yellow
    Rgb(0x00, 0xFC, 0x00), // light green
    Rgb(0x00, 0x93, 0x93), // teal
    Rgb(0x00, 0xFF, 0xFF), // aqua
    Rgb(0x00, 0x00, 0xFC), // royal blue
    Rgb(0xFF, 0x00, 0xFF), // pink
    Rgb(0x7F, 0x7F, 0x7F), // grey
    Rgb(0xD2, 0xD2, 0xD2), // light grey
    // Extended ramp
    Rgb(0x47, 0x00, 0x00),
    Rgb(0x47, 0x21, 0x00),
    Rgb(0x47, 0x47, 0x00),
    Rgb(0x32, 0x47, 0x00),
    Rgb(0x00, 0x47, 0x00),
    Rgb(0x00, 0x47, 0x2C),
    Rgb(0x00, 0x47, 0x47),
    Rgb(0x00, 0x27, 0x47),
    Rgb(0x00, 0x00, 0x47),
    Rgb(0x2E, 0x00, 0x47),
    Rgb(0x47, 0x00, 0x47),
    Rgb(0x47, 0x00, 0x2A),
    Rgb(0x74, 0x00, 0x00),
    Rgb(0x74, 0x3A, 0x00),
    Rgb(0x74, 0x74, 0x00),
    Rgb(0x51, 0x74, 0x00),
    Rgb(0x00, 0x74, 0x00),
    Rgb(0x00, 0x74, 0x49),
    Rgb(0x00, 0x74, 0x74),
    Rgb(0x00, 0x40, 0x74),
    Rgb(0x00, 0x00, 0x74),
    Rgb(0x4B, 0x00, 0x74),
    Rgb(0x74, 0x00, 0x74),
    Rgb(0x74, 0x00, 0x45),
    Rgb(0xB5, 0x00, 0x00),
    Rgb(0xB5, 0x63, 0x00),
    Rgb(0xB5, 0xB5, 0x00),
    Rgb(0x7D, 0xB5, 0x00),
    Rgb(0x00, 0xB5, 0x00),
    Rgb(0x00, 0xB5, 0x71),
    Rgb(0x00, 0xB5, 0xB5),
    Rgb(0x00, 0x63, 0xB5),
    Rgb(0x00, 0x00, 0xB5),
    Rgb(0x75, 0x00, 0xB5),
    Rgb(0xB5, 0x00, 0xB5),
    Rgb(0xB5, 0x00, 0x6B),
    Rgb(0xFF, 0x00, 0x00),
    Rgb(0xFF, 0x8C, 0x00),
    Rgb(0xFF, 0xFF, 0x00),
    Rgb(0xB2, 0xFF, 0x00),
    Rgb(0x00, 0xFF, 0x00),
    Rgb(0x00, 0xFF, 0xA0),
    Rgb(0x00, 0xFF, 0xFF),
    Rgb(0x00, 0x8C, 0xFF),
    Rgb(0x00, 0x00, 0xFF),
    Rgb(0xA5, 0x00, 0xFF),
    Rgb(0xFF, 0x00, 0xFF),
    Rgb(0xFF, 0x00, 0x98),
    Rgb(0xFF, 0x59, 0x59),
    Rgb(0xFF, 0xB4, 0x59),
    Rgb(0xFF, 0xFF, 0x71),
    Rgb(0xCF, 0xFF, 0x60),
    Rgb(0x6F, 0xFF, 0x6F),
    Rgb(0x65, 0xFF, 0xC9),
    Rgb(0x6D, 0xFF, 0xFF),
    Rgb(0x59, 0xB4, 0xFF),
    Rgb(0x59, 0x59, 0xFF),
    Rgb(0xC4, 0x59, 0xFF),
    Rgb(0xFF, 0x66, 0xFF),
    Rgb(0xFF, 0x59, 0xBC),
    Rgb(0xFF, 0x9C, 0x9C),
    Rgb(0xFF, 0xD3, 0x9C),
    Rgb(0xFF, 0xFF, 0x9C),
    Rgb(0xE2, 0xFF, 0x9C),
    Rgb(0x9C, 0xFF, 0x9C),
    Rgb(0x9C, 0xFF, 0xDB),
    Rgb(0x9C, 0xFF, 0xFF),
    Rgb(0x9C, 0xD3, 0xFF),
    Rgb(0x9C, 0x9C, 0xFF),
    Rgb(0xDC, 0x9C, 0xFF),
    Rgb(0xFF, 0x9C, 0xFF),
    Rgb(0xFF, 0x94, 0xD3),
    Rgb(0x00, 0x00, 0x00),
    Rgb(0x13, 0x13, 0x13),
    Rgb(0x28, 0x28, 0x28),
    Rgb(0x36, 0x36, 0x36),
    Rgb(0x4D, 0x4D, 0x4D),
    Rgb(0x65, 0x65, 0x65),
    Rgb(0x81, 0x81, 0x81),
    Rgb(0x9F, 0x9F, 0x9F),
    Rgb(0xBC, 0xBC, 0xBC),
    Rgb(0xE2, 0xE2, 0xE2),
    Rgb(0xFF, 0xFF, 0xFF),
];

/// An index into [`PALETTE`].
///
/// Construction folds anything at or above the palette size into the base
/// sixteen colors, so every `ColorIndex` is a valid lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Creates a color index, folding out-of-range values by `% 16`.
    pub const fn new(index: u8) -> ColorIndex {
        if index as usize >= PALETTE_SIZE {
            ColorIndex(index % BASE_COLORS)
        } else {
            ColorIndex(index)
        }
    }

    /// The palette position this index refers to.
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// The palette color for this index.
    pub fn rgb(&self) -> Rgb {
        PALETTE[self.0 as usize]
    }

    /// The palette color formatted as `#RRGGBB`.
    pub fn hex(&self) -> String {
        self.rgb().hex()
    }
}

impl From<u8> for ColorIndex {
    fn from(index: u8) -> Self {
        ColorIndex::new(index)
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_colors() {
        assert_eq!(ColorIndex::new(0).rgb(), Rgb(0xFF, 0xFF, 0xFF));
        assert_eq!(ColorIndex::new(1).rgb(), Rgb(0x00, 0x00, 0x00));
        assert_eq!(ColorIndex::new(4).hex(), "#FF0000");
        assert_eq!(ColorIndex::new(15).hex(), "#D2D2D2");
    }

    #[test]
    fn test_extended_ramp() {
        assert_eq!(ColorIndex::new(16).hex(), "#470000");
        assert_eq!(ColorIndex::new(52).hex(), "#FF0000");
        assert_eq!(ColorIndex::new(98).hex(), "#FFFFFF");
    }

    #[test]
    fn test_out_of_range_folds_into_base_colors() {
        assert_eq!(ColorIndex::new(99).value(), 3);
        assert_eq!(ColorIndex::new(120).value(), 120 % 16);
        assert_eq!(ColorIndex::new(255).value(), 15);
        assert_eq!(ColorIndex::new(98).value(), 98);
    }

    #[test]
    fn test_display_is_two_digits() {
        assert_eq!(ColorIndex::new(4).to_string(), "04");
        assert_eq!(ColorIndex::new(42).to_string(), "42");
    }
}
