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

use crate::consts::{self, MAX_COLOR_DIGITS};
use crate::palette::ColorIndex;
use std::ops::Range;

/// A single inline control code, with any color digits already decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlCode {
    /// `0x02`
    Bold,
    /// `0x1D`
    Italic,
    /// `0x1F`
    Underline,
    /// `0x1E`
    Strikethrough,
    /// `0x08`
    Hidden,
    /// `0x16`
    Reverse,
    /// `0x0F`
    Reset,
    /// `0x07`
    Beep,
    /// `0x06`
    Blink,
    /// `0x09`, the speaker/message separator
    Tab,
    /// `0x03` with up to two foreground digits, then optionally `,` and up to
    /// two background digits.
    ///
    /// A `foreground` of `None` means the code carried no digits at all, which
    /// clears both colors. A `background` of `None` alongside a foreground means
    /// the background is left as it was.
    Color {
        /// Foreground index, if any digits followed the code
        foreground: Option<ColorIndex>,
        /// Background index, if a comma and digits followed the foreground
        background: Option<ColorIndex>,
    },
}

impl ControlCode {
    /// Maps a single-byte control code. Returns `None` for [`consts::COLOR`],
    /// which needs the bytes that follow it, and for every non-control byte.
    pub fn from_byte(byte: u8) -> Option<ControlCode> {
        match byte {
            consts::BOLD => Some(ControlCode::Bold),
            consts::ITALIC => Some(ControlCode::Italic),
            consts::UNDERLINE => Some(ControlCode::Underline),
            consts::STRIKETHROUGH => Some(ControlCode::Strikethrough),
            consts::HIDDEN => Some(ControlCode::Hidden),
            consts::REVERSE => Some(ControlCode::Reverse),
            consts::RESET => Some(ControlCode::Reset),
            consts::BEEP => Some(ControlCode::Beep),
            consts::BLINK => Some(ControlCode::Blink),
            consts::TAB => Some(ControlCode::Tab),
            _ => None,
        }
    }
}

/// One item produced by [`ControlScanner`].
///
/// Ranges are byte ranges into the scanned line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A maximal run of literal text containing no control code.
    Text {
        /// Byte range in the raw line
        range: Range<usize>,
        /// The literal text
        text: &'a str,
    },
    /// A control code, including any color digits it consumed.
    Control {
        /// Byte range in the raw line
        range: Range<usize>,
        /// The decoded code
        code: ControlCode,
    },
}

impl Token<'_> {
    /// Byte range this token occupies in the raw line.
    pub fn range(&self) -> Range<usize> {
        match self {
            Token::Text { range, .. } | Token::Control { range, .. } => range.clone(),
        }
    }
}

/// Splits one raw line into literal text runs and control codes.
///
/// The scanner is total: every byte is either part of a control code or part
/// of a text run. Because all control codes are ASCII, text runs always fall
/// on UTF-8 character boundaries.
///
/// # Examples
///
/// ```
/// use ircview_markup::{ControlCode, ControlScanner, Token};
///
/// let tokens: Vec<_> = ControlScanner::new("\x02hi").collect();
/// assert_eq!(tokens[0], Token::Control { range: 0..1, code: ControlCode::Bold });
/// assert_eq!(tokens[1], Token::Text { range: 1..3, text: "hi" });
/// ```
pub struct ControlScanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> ControlScanner<'a> {
    /// Creates a scanner positioned at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Current byte position in the raw line.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn scan_text(&mut self) -> Token<'a> {
        let bytes = self.line.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len() && !consts::is_control_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        Token::Text {
            range: start..self.pos,
            text: &self.line[start..self.pos],
        }
    }

    /// Parses the digits after a color code. `self.pos` is just past the `0x03`.
    fn scan_color(&mut self) -> ControlCode {
        let foreground = self.scan_color_index();
        let background = match foreground {
            Some(_) => self.scan_background(),
            None => None,
        };
        ControlCode::Color {
            foreground,
            background,
        }
    }

    /// A comma after the foreground belongs to the code, digits or not.
    fn scan_background(&mut self) -> Option<ColorIndex> {
        if self.line.as_bytes().get(self.pos) == Some(&b',') {
            self.pos += 1;
            self.scan_color_index()
        } else {
            None
        }
    }

    fn scan_color_index(&mut self) -> Option<ColorIndex> {
        let bytes = self.line.as_bytes();
        let mut value: Option<u8> = None;
        for _ in 0..MAX_COLOR_DIGITS {
            match bytes.get(self.pos) {
                Some(digit) if digit.is_ascii_digit() => {
                    value = Some(value.unwrap_or(0) * 10 + (digit - b'0'));
                    self.pos += 1;
                }
                _ => break,
            }
        }
        value.map(ColorIndex::new)
    }
}

impl<'a> Iterator for ControlScanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.line.as_bytes();
        let start = self.pos;
        let byte = *bytes.get(start)?;

        if byte == consts::COLOR {
            self.pos += 1;
            let code = self.scan_color();
            return Some(Token::Control {
                range: start..self.pos,
                code,
            });
        }

        match ControlCode::from_byte(byte) {
            Some(code) => {
                self.pos += 1;
                Some(Token::Control {
                    range: start..self.pos,
                    code,
                })
            }
            None => Some(self.scan_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(line: &str) -> Vec<ControlCode> {
        ControlScanner::new(line)
            .filter_map(|token| match token {
                Token::Control { code, .. } => Some(code),
                Token::Text { .. } => None,
            })
            .collect()
    }

    fn color(foreground: Option<u8>, background: Option<u8>) -> ControlCode {
        ControlCode::Color {
            foreground: foreground.map(ColorIndex::new),
            background: background.map(ColorIndex::new),
        }
    }

    #[test]
    fn test_plain_text_is_one_token() {
        let tokens: Vec<_> = ControlScanner::new("hello world").collect();
        assert_eq!(
            tokens,
            vec![Token::Text {
                range: 0..11,
                text: "hello world"
            }]
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(ControlScanner::new("").count(), 0);
    }

    #[test]
    fn test_single_byte_codes() {
        let line = "\x02\x1d\x1f\x1e\x08\x16\x0f\x07\x06\x09";
        assert_eq!(
            codes(line),
            vec![
                ControlCode::Bold,
                ControlCode::Italic,
                ControlCode::Underline,
                ControlCode::Strikethrough,
                ControlCode::Hidden,
                ControlCode::Reverse,
                ControlCode::Reset,
                ControlCode::Beep,
                ControlCode::Blink,
                ControlCode::Tab,
            ]
        );
    }

    #[test]
    fn test_color_forms() {
        assert_eq!(codes("\x03"), vec![color(None, None)]);
        assert_eq!(codes("\x034"), vec![color(Some(4), None)]);
        assert_eq!(codes("\x0304"), vec![color(Some(4), None)]);
        assert_eq!(codes("\x034,2"), vec![color(Some(4), Some(2))]);
        assert_eq!(codes("\x0304,12"), vec![color(Some(4), Some(12))]);
    }

    #[test]
    fn test_color_consumes_at_most_two_digits() {
        let tokens: Vec<_> = ControlScanner::new("\x03123").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Control {
                    range: 0..3,
                    code: color(Some(12), None)
                },
                Token::Text {
                    range: 3..4,
                    text: "3"
                },
            ]
        );
    }

    #[test]
    fn test_comma_without_digit_is_consumed() {
        let tokens: Vec<_> = ControlScanner::new("\x034,x").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Control {
                    range: 0..3,
                    code: color(Some(4), None)
                },
                Token::Text {
                    range: 3..4,
                    text: "x"
                },
            ]
        );
    }

    #[test]
    fn test_comma_without_foreground_is_text() {
        let tokens: Vec<_> = ControlScanner::new("\x03,5").collect();
        assert_eq!(tokens[0].range(), 0..1);
        assert_eq!(
            tokens[1],
            Token::Text {
                range: 1..3,
                text: ",5"
            }
        );
    }

    #[test]
    fn test_truncated_color_at_end() {
        assert_eq!(codes("red\x03"), vec![color(None, None)]);
        assert_eq!(codes("red\x034,"), vec![color(Some(4), None)]);
    }

    #[test]
    fn test_large_index_folds() {
        assert_eq!(codes("\x0399,99"), vec![color(Some(3), Some(3))]);
    }

    #[test]
    fn test_unicode_text_runs() {
        let tokens: Vec<_> = ControlScanner::new("héllo\x02世界").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text {
                    range: 0..6,
                    text: "héllo"
                },
                Token::Control {
                    range: 6..7,
                    code: ControlCode::Bold
                },
                Token::Text {
                    range: 7..13,
                    text: "世界"
                },
            ]
        );
    }
}
