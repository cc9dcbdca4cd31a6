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

use crate::palette::ColorIndex;
use crate::parser::ControlCode;
use std::borrow::Cow;

/// The formatting in effect at one position of a line.
///
/// A `StyleState` starts out plain (every flag off, both colors unset) at the
/// beginning of each line and accumulates the effect of every control code
/// consumed so far. Toggle codes flip their flag each time they appear; the
/// reset code returns the state to plain.
///
/// # Examples
///
/// ```
/// use ircview_markup::{ControlCode, StyleState};
///
/// let mut style = StyleState::default();
/// style.apply(&ControlCode::Bold);
/// assert!(style.bold);
/// style.apply(&ControlCode::Bold);
/// assert!(style.is_plain());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
    /// Single underline
    pub underline: bool,
    /// Strikethrough line
    pub strikethrough: bool,
    /// Hidden text. Still displayed, but excluded from copy by some sinks.
    pub hidden: bool,
    /// Reverse video
    pub reverse: bool,
    /// Foreground palette color, `None` when unset
    pub foreground: Option<ColorIndex>,
    /// Background palette color, `None` when unset
    pub background: Option<ColorIndex>,
}

impl StyleState {
    /// Returns `true` when no flag is set and neither color is set.
    pub fn is_plain(&self) -> bool {
        *self == StyleState::default()
    }

    /// Clears every flag and both colors.
    pub fn reset(&mut self) {
        *self = StyleState::default();
    }

    /// Applies the effect of a single control code.
    ///
    /// Beep, blink and tab leave the state untouched. A color code without
    /// digits clears both colors; a color code with only a foreground keeps the
    /// current background.
    pub fn apply(&mut self, code: &ControlCode) {
        match code {
            ControlCode::Bold => self.bold = !self.bold,
            ControlCode::Italic => self.italic = !self.italic,
            ControlCode::Underline => self.underline = !self.underline,
            ControlCode::Strikethrough => self.strikethrough = !self.strikethrough,
            ControlCode::Hidden => self.hidden = !self.hidden,
            ControlCode::Reverse => self.reverse = !self.reverse,
            ControlCode::Reset => self.reset(),
            ControlCode::Color {
                foreground: None, ..
            } => {
                self.foreground = None;
                self.background = None;
            }
            ControlCode::Color {
                foreground: Some(foreground),
                background,
            } => {
                self.foreground = Some(*foreground);
                if let Some(background) = background {
                    self.background = Some(*background);
                }
            }
            ControlCode::Beep | ControlCode::Blink | ControlCode::Tab => {}
        }
    }

    /// Names of the display tags this style maps to, in a stable order.
    ///
    /// Colors map to `fg-NN` / `bg-NN`, matching one tag per palette entry.
    ///
    /// ```
    /// use ircview_markup::{ColorIndex, StyleState};
    ///
    /// let style = StyleState {
    ///     bold: true,
    ///     foreground: Some(ColorIndex::new(4)),
    ///     ..Default::default()
    /// };
    /// assert_eq!(style.tag_names(), vec!["bold", "fg-04"]);
    /// ```
    pub fn tag_names(&self) -> Vec<Cow<'static, str>> {
        let mut names = Vec::new();
        let flags = [
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.underline, "underline"),
            (self.strikethrough, "strikethrough"),
            (self.hidden, "hidden"),
            (self.reverse, "reverse"),
        ];
        for (enabled, name) in flags {
            if enabled {
                names.push(Cow::Borrowed(name));
            }
        }
        if let Some(foreground) = self.foreground {
            names.push(Cow::Owned(format!("fg-{}", foreground)));
        }
        if let Some(background) = self.background {
            names.push(Cow::Owned(format!("bg-{}", background)));
        }
        names
    }
}
