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

use crate::consts::is_control_byte;
use crate::parser::{ControlCode, ControlScanner, Token};
use std::borrow::Cow;

/// Removes inline control codes from a line, leaving its visible text.
///
/// Color codes are removed together with their digits, and the tab separator
/// becomes a single space, so the result matches what a sink displays.
///
/// # Performance
///
/// If the line contains no control byte the input is returned borrowed
/// (zero-copy). Otherwise a new `String` is allocated.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use ircview_markup::strip_irc_codes;
///
/// assert_eq!(strip_irc_codes("\x02bold\x02 and \x0304red"), "bold and red");
/// assert_eq!(strip_irc_codes("nick\tmessage"), "nick message");
/// assert!(matches!(strip_irc_codes("plain"), Cow::Borrowed(_)));
/// ```
pub fn strip_irc_codes(line: &str) -> Cow<'_, str> {
    if !line.bytes().any(is_control_byte) {
        return Cow::Borrowed(line);
    }

    let mut result = String::with_capacity(line.len());
    for token in ControlScanner::new(line) {
        match token {
            Token::Text { text, .. } => result.push_str(text),
            Token::Control {
                code: ControlCode::Tab,
                ..
            } => result.push(' '),
            Token::Control { .. } => {}
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_borrowed() {
        assert!(matches!(strip_irc_codes("no codes"), Cow::Borrowed("no codes")));
    }

    #[test]
    fn test_strips_every_code() {
        let line = "\x02b\x1di\x1fu\x1es\x08h\x16r\x0fx\x07\x06";
        assert_eq!(strip_irc_codes(line), "biushrx");
    }

    #[test]
    fn test_strips_color_digits_only() {
        assert_eq!(strip_irc_codes("\x0304,12a\x0399b\x03c"), "abc");
        assert_eq!(strip_irc_codes("\x034,x"), "x");
        assert_eq!(strip_irc_codes("\x03,x"), ",x");
        assert_eq!(strip_irc_codes("\x03123"), "3");
    }

    #[test]
    fn test_tab_becomes_space() {
        assert_eq!(strip_irc_codes("\x02nick\x02\thello"), "nick hello");
    }
}
