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

use ircview_markup::{StyleState, StyledSpan, UrlRange};
use std::ops::Range;

/// A display surface that accepts visible text and tags ranges of it.
///
/// Offsets are in visible characters from the start of the sink. Text is only
/// ever appended; `insert` places text at [`end_offset`](TextSink::end_offset).
pub trait TextSink {
    /// Visible offset one past the last character.
    fn end_offset(&self) -> usize;

    /// Appends `text` and returns the offset it was inserted at.
    fn insert(&mut self, text: &str) -> usize;

    /// Tags `range` with `style`. A plain style applies nothing.
    fn apply_style(&mut self, range: Range<usize>, style: &StyleState);

    /// Tags a link range.
    fn apply_url(&mut self, url: &UrlRange);
}

/// Inserts spans in order and tags each with its style.
///
/// Span ranges are expected to start at the sink's current end offset, as they
/// do when a line is rendered at [`TextSink::end_offset`].
pub fn insert_spans<S>(sink: &mut S, spans: &[StyledSpan])
where
    S: TextSink + ?Sized,
{
    for span in spans {
        let start = sink.insert(span.text());
        debug_assert_eq!(start, span.start());
        sink.apply_style(start..start + span.range().len(), span.style());
    }
}

/// Tags every link range.
pub fn apply_urls<S>(sink: &mut S, urls: &[UrlRange])
where
    S: TextSink + ?Sized,
{
    for url in urls {
        sink.apply_url(url);
    }
}
