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

use crate::config::RenderConfig;
use crate::parser::{ControlCode, ControlScanner, Token};
use crate::style::StyleState;
use crate::url::{UrlClassifier, UrlRange, WordClassifier, detect_urls};
use std::ops::Range;
use tracing::trace;

/// A run of visible text sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledSpan {
    text: String,
    style: StyleState,
    range: Range<usize>,
}

impl StyledSpan {
    /// Creates a span. `range` is in visible characters.
    pub fn new(text: impl Into<String>, style: StyleState, range: Range<usize>) -> Self {
        Self {
            text: text.into(),
            style,
            range,
        }
    }

    /// The visible text of the span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style in effect for the whole span.
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Visible character range, including the line start offset.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// First visible offset of the span.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Visible offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.range.end
    }
}

/// The result of rendering one line: styled spans in input order and the
/// links found in the same line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedLine {
    spans: Vec<StyledSpan>,
    urls: Vec<UrlRange>,
}

impl RenderedLine {
    /// Styled spans, contiguous and in input order.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Link ranges in the same coordinate space as the spans.
    pub fn urls(&self) -> &[UrlRange] {
        &self.urls
    }

    /// Splits the line into its spans and links.
    pub fn into_parts(self) -> (Vec<StyledSpan>, Vec<UrlRange>) {
        (self.spans, self.urls)
    }

    /// Concatenation of every span's text.
    pub fn visible_text(&self) -> String {
        self.spans.iter().map(StyledSpan::text).collect()
    }

    /// Number of visible characters in the line.
    pub fn len_chars(&self) -> usize {
        match (self.spans.first(), self.spans.last()) {
            (Some(first), Some(last)) => last.end() - first.start(),
            _ => 0,
        }
    }

    /// Returns `true` when the line has no visible text.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Accumulates literal text until the next control code closes it into a span.
struct SpanBuilder {
    spans: Vec<StyledSpan>,
    pending: String,
    start: usize,
    cursor: usize,
}

impl SpanBuilder {
    fn new(line_start_offset: usize) -> Self {
        Self {
            spans: Vec::new(),
            pending: String::new(),
            start: line_start_offset,
            cursor: line_start_offset,
        }
    }

    fn push_str(&mut self, text: &str) {
        self.pending.push_str(text);
        self.cursor += text.chars().count();
    }

    fn push_char(&mut self, ch: char) {
        self.pending.push(ch);
        self.cursor += 1;
    }

    /// Closes the pending text, if any, with `style`.
    fn flush(&mut self, style: StyleState) {
        if !self.pending.is_empty() {
            self.spans.push(StyledSpan {
                text: std::mem::take(&mut self.pending),
                style,
                range: self.start..self.cursor,
            });
        }
        self.start = self.cursor;
    }
}

/// Splits a raw line into styled spans without looking for links.
///
/// Each control code closes the text gathered since the previous code using the
/// style that was in effect for it, then updates the style. The tab separator
/// closes the pending text and opens the next span with a single space.
pub fn render_spans(raw: &str, line_start_offset: usize) -> Vec<StyledSpan> {
    let mut builder = SpanBuilder::new(line_start_offset);
    let mut style = StyleState::default();

    for token in ControlScanner::new(raw) {
        match token {
            Token::Text { text, .. } => builder.push_str(text),
            Token::Control { code, .. } => {
                builder.flush(style);
                if code == ControlCode::Tab {
                    builder.push_char(' ');
                }
                style.apply(&code);
            }
        }
    }
    builder.flush(style);
    builder.spans
}

/// Renders one raw line into styled spans and link ranges.
///
/// `line_start_offset` is the visible position the line's first character will
/// occupy in the sink; every returned range is offset by it.
///
/// # Examples
///
/// ```
/// use ircview_markup::{UrlClassifier, render};
///
/// let line = render("\x02Hello\x02 world", 0, &UrlClassifier);
/// assert_eq!(line.spans().len(), 2);
/// assert!(line.spans()[0].style().bold);
/// assert_eq!(line.spans()[1].text(), " world");
/// ```
pub fn render<C>(raw: &str, line_start_offset: usize, classifier: &C) -> RenderedLine
where
    C: WordClassifier + ?Sized,
{
    let spans = render_spans(raw, line_start_offset);
    let urls = detect_urls(raw, line_start_offset, classifier);
    trace!(spans = spans.len(), urls = urls.len(), "rendered line");
    RenderedLine { spans, urls }
}

/// Renders raw bytes, replacing invalid UTF-8 with `U+FFFD` first.
pub fn render_bytes<C>(raw: &[u8], line_start_offset: usize, classifier: &C) -> RenderedLine
where
    C: WordClassifier + ?Sized,
{
    render(&String::from_utf8_lossy(raw), line_start_offset, classifier)
}

/// A renderer bundling its configuration and word classifier.
pub struct Renderer<C = UrlClassifier> {
    config: RenderConfig,
    classifier: C,
}

impl Renderer<UrlClassifier> {
    /// Creates a renderer with the default configuration and stock classifier.
    pub fn new() -> Self {
        Self::with_classifier(RenderConfig::default(), UrlClassifier)
    }
}

impl Default for Renderer<UrlClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: WordClassifier> Renderer<C> {
    /// Creates a renderer with a custom classifier.
    pub fn with_classifier(config: RenderConfig, classifier: C) -> Self {
        Self { config, classifier }
    }

    /// Active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The word classifier used for link detection
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Renders one line. Link detection is skipped when disabled in the config.
    pub fn render(&self, raw: &str, line_start_offset: usize) -> RenderedLine {
        if self.config.detect_urls {
            render(raw, line_start_offset, &self.classifier)
        } else {
            RenderedLine {
                spans: render_spans(raw, line_start_offset),
                urls: Vec::new(),
            }
        }
    }

    /// Renders raw bytes, see [`render_bytes`].
    pub fn render_bytes(&self, raw: &[u8], line_start_offset: usize) -> RenderedLine {
        self.render(&String::from_utf8_lossy(raw), line_start_offset)
    }
}
