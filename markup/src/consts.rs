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

/// Toggles bold text.
pub const BOLD: u8 = 0x02;
/// Introduces a color change, followed by optional `fg[,bg]` digits.
pub const COLOR: u8 = 0x03;
/// Blink. Consumed without a visible effect.
pub const BLINK: u8 = 0x06;
/// Beep. Consumed without a visible effect.
pub const BEEP: u8 = 0x07;
/// Toggles hidden text.
pub const HIDDEN: u8 = 0x08;
/// Separator between a speaker and the message body. Rendered as one space.
pub const TAB: u8 = 0x09;
/// Clears every attribute and both colors.
pub const RESET: u8 = 0x0F;
/// Toggles reverse video.
pub const REVERSE: u8 = 0x16;
/// Toggles italic text.
pub const ITALIC: u8 = 0x1D;
/// Toggles strikethrough text.
pub const STRIKETHROUGH: u8 = 0x1E;
/// Toggles underlined text.
pub const UNDERLINE: u8 = 0x1F;

/// Number of entries in the color palette (indices `0..=98`).
pub const PALETTE_SIZE: usize = 99;

/// Out-of-range color indices are folded into the base palette with this modulus.
pub const BASE_COLORS: u8 = 16;

/// Maximum number of digits in a single color index.
pub const MAX_COLOR_DIGITS: usize = 2;

/// Returns `true` if `byte` is one of the recognized inline control codes.
pub const fn is_control_byte(byte: u8) -> bool {
    matches!(
        byte,
        BOLD | COLOR
            | BLINK
            | BEEP
            | HIDDEN
            | TAB
            | RESET
            | REVERSE
            | ITALIC
            | STRIKETHROUGH
            | UNDERLINE
    )
}
