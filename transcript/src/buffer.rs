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

use crate::sink::TextSink;
use ircview_markup::{StyleState, UrlRange};
use std::ops::Range;
use tracing::trace;

/// A style tag over a range of visible characters.
#[derive(Clone, Debug, PartialEq, Eq)]
struct StyleTag {
    range: Range<usize>,
    style: StyleState,
}

/// Transcript Buffer
///
/// Append-only text with style, link and timestamp tags. Offsets are visible
/// characters, not bytes.
#[derive(Clone, Debug, Default)]
pub struct TranscriptBuffer {
    /// Buffer contents
    text: String,
    /// Length of `text` in characters
    len_chars: usize,
    /// Style tags, in insertion order
    styles: Vec<StyleTag>,
    /// Link tags, in insertion order
    urls: Vec<UrlRange>,
    /// Timestamp tags
    stamps: Vec<Range<usize>>,
}

impl TranscriptBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Full buffer contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of visible characters
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    /// Returns `true` when the buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines. A trailing newline does not start a new line.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Returns line `index` without its newline.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.text.lines().nth(index)
    }

    /// Text between two visible offsets, clamped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end.max(range.start));
        &self.text[start..end]
    }

    /// The style tagged at `offset`, if any.
    pub fn styles_at(&self, offset: usize) -> Option<StyleState> {
        self.styles
            .iter()
            .find(|tag| tag.range.contains(&offset))
            .map(|tag| tag.style)
    }

    /// The link covering `offset`, with its full extent and text.
    pub fn url_at(&self, offset: usize) -> Option<&UrlRange> {
        self.urls.iter().find(|url| url.range().contains(&offset))
    }

    /// All link tags, oldest first.
    pub fn urls(&self) -> &[UrlRange] {
        &self.urls
    }

    /// Returns `true` when `offset` lies inside a timestamp.
    pub fn is_stamp(&self, offset: usize) -> bool {
        self.stamps.iter().any(|range| range.contains(&offset))
    }

    /// Tags `range` as a timestamp.
    pub fn tag_stamp(&mut self, range: Range<usize>) {
        if !range.is_empty() {
            self.stamps.push(range);
        }
    }

    /// Visible offset just after the `n`th newline, or the end of the buffer.
    pub fn line_start(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.text
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch == '\n')
            .nth(n - 1)
            .map_or(self.len_chars, |(offset, _)| offset + 1)
    }

    /// Visible range of the line containing `offset`, excluding its newline.
    pub fn line_bounds(&self, offset: usize) -> Range<usize> {
        let offset = offset.min(self.len_chars);
        let mut start = 0;
        for (index, ch) in self.text.chars().enumerate() {
            if ch != '\n' {
                continue;
            }
            if index >= offset {
                return start..index;
            }
            start = index + 1;
        }
        start..self.len_chars
    }

    /// Offset of the end of the last complete line.
    ///
    /// When the buffer holds a single line, that is the end of the buffer.
    pub fn last_line_end(&self) -> usize {
        if !self.text.contains('\n') {
            return self.len_chars;
        }
        let last_line = self.line_bounds(self.len_chars);
        last_line.start.saturating_sub(1)
    }

    /// Removes the first `lines` lines, or everything when `lines` is zero.
    ///
    /// Every remaining tag shifts left; tags inside the removed text are
    /// dropped and tags straddling the cut are truncated. Returns the number of
    /// characters removed.
    pub fn clear_lines(&mut self, lines: usize) -> usize {
        let cut = if lines == 0 {
            self.len_chars
        } else {
            self.line_start(lines)
        };
        if cut == 0 {
            return 0;
        }

        let byte_cut = self.byte_index(cut);
        self.text.drain(..byte_cut);
        self.len_chars -= cut;

        self.styles = std::mem::take(&mut self.styles)
            .into_iter()
            .filter_map(|tag| {
                shift_range(&tag.range, cut).map(|range| StyleTag {
                    range,
                    style: tag.style,
                })
            })
            .collect();
        self.urls = std::mem::take(&mut self.urls)
            .into_iter()
            .filter_map(|url| url.shifted_back(cut))
            .collect();
        self.stamps = std::mem::take(&mut self.stamps)
            .into_iter()
            .filter_map(|range| shift_range(&range, cut))
            .collect();

        trace!(lines, removed = cut, "cleared buffer lines");
        cut
    }

    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(index, _)| index)
    }
}

/// Moves `range` left by `delta`, dropping it if nothing remains.
pub(crate) fn shift_range(range: &Range<usize>, delta: usize) -> Option<Range<usize>> {
    if range.end <= delta {
        return None;
    }
    Some(range.start.saturating_sub(delta)..range.end - delta)
}

impl TextSink for TranscriptBuffer {
    fn end_offset(&self) -> usize {
        self.len_chars
    }

    fn insert(&mut self, text: &str) -> usize {
        let offset = self.len_chars;
        self.text.push_str(text);
        self.len_chars += text.chars().count();
        offset
    }

    fn apply_style(&mut self, range: Range<usize>, style: &StyleState) {
        if style.is_plain() || range.is_empty() {
            return;
        }
        self.styles.push(StyleTag {
            range,
            style: *style,
        });
    }

    fn apply_url(&mut self, url: &UrlRange) {
        self.urls.push(url.clone());
    }
}
