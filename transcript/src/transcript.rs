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

use crate::buffer::{TranscriptBuffer, shift_range};
use crate::config::TranscriptConfig;
use crate::link::LinkOpener;
use crate::result::{TranscriptError, TranscriptResult};
use crate::scrollback::{ScrollbackCodec, ScrollbackError, ScrollbackLine};
use crate::sink::{TextSink, apply_urls, insert_spans};
use bytes::BytesMut;
use chrono::{DateTime, Local, TimeZone};
use ircview_markup::{Renderer, UrlClassifier, WordClassifier, WordKind, resolve_uri};
use std::fmt::Write;
use std::ops::Range;
use tokio_util::codec::Decoder;
use tracing::{debug, instrument, trace, warn};

/// Read marker: where the reader left off, and the line range drawn for it.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Marker {
    offset: usize,
    drawn: Option<Range<usize>>,
}

/// A chat session's transcript.
///
/// Owns the buffer, the renderer and the read marker. Lines are appended with
/// [`print_text`](Transcript::print_text) in arrival order.
///
/// # Examples
///
/// ```
/// use ircview_transcript::{Transcript, TranscriptConfig};
///
/// let config = TranscriptConfig::default().with_stamp_text(false);
/// let mut transcript = Transcript::new(config)?;
/// transcript.print_text("\x02hello\x02 https://example.com", None);
/// assert_eq!(transcript.buffer().text(), "hello https://example.com\n");
/// assert!(transcript.buffer().url_at(8).is_some());
/// # Ok::<(), ircview_transcript::TranscriptError>(())
/// ```
pub struct Transcript<C = UrlClassifier> {
    config: TranscriptConfig,
    renderer: Renderer<C>,
    buffer: TranscriptBuffer,
    marker: Option<Marker>,
}

impl Transcript<UrlClassifier> {
    /// Creates a transcript with the stock renderer.
    pub fn new(config: TranscriptConfig) -> TranscriptResult<Self> {
        Self::with_renderer(config, Renderer::new())
    }
}

impl<C: WordClassifier> Transcript<C> {
    /// Creates a transcript with a custom renderer.
    pub fn with_renderer(config: TranscriptConfig, renderer: Renderer<C>) -> TranscriptResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            renderer,
            buffer: TranscriptBuffer::new(),
            marker: None,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// The renderer lines go through
    pub fn renderer(&self) -> &Renderer<C> {
        &self.renderer
    }

    /// The underlying buffer
    pub fn buffer(&self) -> &TranscriptBuffer {
        &self.buffer
    }

    /// Appends one line of IRC formatted text.
    ///
    /// When timestamps are enabled the line is prefixed with `stamp`, or with
    /// the current local time when `stamp` is `None`. A newline is appended
    /// unless `text` already ends in one. Once the line is in, the oldest lines
    /// are cleared if the buffer exceeds `max_lines`.
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn print_text(&mut self, text: &str, stamp: Option<DateTime<Local>>) {
        let mut line_start = self.buffer.end_offset();

        if self.config.stamps_enabled() {
            let stamp = self.format_stamp(&stamp.unwrap_or_else(Local::now));
            if !stamp.is_empty() {
                let start = self.buffer.insert(&stamp);
                line_start = self.buffer.end_offset();
                self.buffer.tag_stamp(start..line_start);
            }
        }

        let (spans, urls) = self.renderer.render(text, line_start).into_parts();
        insert_spans(&mut self.buffer, &spans);
        if !text.ends_with('\n') {
            self.buffer.insert("\n");
        }
        apply_urls(&mut self.buffer, &urls);

        self.enforce_max_lines();
    }

    fn format_stamp(&self, stamp: &DateTime<Local>) -> String {
        let mut formatted = String::new();
        if write!(formatted, "{}", stamp.format(&self.config.stamp_format)).is_err() {
            warn!(format = %self.config.stamp_format, "failed to format timestamp");
            formatted.clear();
        }
        formatted
    }

    fn enforce_max_lines(&mut self) {
        let Some(max_lines) = self.config.max_lines else {
            return;
        };
        let lines = self.buffer.line_count();
        if lines > max_lines {
            debug!(lines, max_lines, "trimming transcript");
            self.clear(lines - max_lines);
        }
    }

    /// Removes the first `lines` lines, or everything when `lines` is zero.
    ///
    /// The read marker moves with the text; a drawn marker whose line was
    /// removed is no longer drawn.
    #[instrument(skip(self))]
    pub fn clear(&mut self, lines: usize) {
        let removed = self.buffer.clear_lines(lines);
        if removed == 0 {
            return;
        }
        if let Some(marker) = self.marker.as_mut() {
            marker.offset = marker.offset.saturating_sub(removed);
            marker.drawn = marker
                .drawn
                .as_ref()
                .and_then(|range| shift_range(range, removed));
        }
    }

    /// Records the end of the last complete line as the read marker.
    ///
    /// Replaces any previous marker. Does nothing when markers are disabled.
    pub fn set_marker(&mut self) {
        if !self.config.show_marker {
            return;
        }
        let offset = self.buffer.last_line_end();
        trace!(offset, "set read marker");
        self.marker = Some(Marker {
            offset,
            drawn: None,
        });
    }

    /// Draws the marker over its line. Returns `false` when there is no marker,
    /// markers are disabled, or the marked line is empty.
    pub fn draw_marker(&mut self) -> bool {
        if !self.config.show_marker {
            return false;
        }
        let Some(marker) = self.marker.as_mut() else {
            return false;
        };
        let line = self.buffer.line_bounds(marker.offset);
        if line.is_empty() {
            return false;
        }
        marker.drawn = Some(line);
        true
    }

    /// Removes the marker and its drawn line.
    pub fn clear_marker(&mut self) {
        self.marker = None;
    }

    /// Offset of the read marker
    pub fn marker(&self) -> Option<usize> {
        self.marker.as_ref().map(|marker| marker.offset)
    }

    /// Range of the drawn marker line
    pub fn marker_range(&self) -> Option<Range<usize>> {
        self.marker.as_ref().and_then(|marker| marker.drawn.clone())
    }

    /// Opens the link under `offset`.
    ///
    /// The tagged word is classified again to pick the URI scheme. Returns
    /// `Ok(false)` when there is no link at `offset`.
    #[instrument(skip(self, opener))]
    pub fn activate_link<O>(&self, offset: usize, opener: &O) -> TranscriptResult<bool>
    where
        O: LinkOpener + ?Sized,
    {
        let len = self.buffer.len_chars();
        if offset > len {
            return Err(TranscriptError::OffsetOutOfBounds { offset, len });
        }
        let Some(url) = self.buffer.url_at(offset) else {
            return Ok(false);
        };
        let kind = match self.renderer.classifier().classify(url.text()) {
            WordKind::None => url.kind(),
            kind => kind,
        };
        let uri = resolve_uri(url.text(), kind);
        debug!(%uri, "opening link");
        opener.open(&uri)?;
        Ok(true)
    }

    /// Prints previously stored lines, each with its own timestamp.
    ///
    /// Returns the number of lines printed.
    #[instrument(skip_all)]
    pub fn replay<I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = ScrollbackLine>,
    {
        let mut count = 0;
        for line in lines {
            self.replay_line(&line);
            count += 1;
        }
        debug!(count, "replayed scrollback");
        count
    }

    /// Decodes and prints a block of stored scrollback.
    ///
    /// Overlong records are skipped. Returns the number of lines printed.
    #[instrument(skip_all, fields(len = data.len()))]
    pub fn replay_bytes(&mut self, data: &[u8]) -> TranscriptResult<usize> {
        let mut codec = ScrollbackCodec::new();
        let mut src = BytesMut::from(data);
        let mut count = 0;
        loop {
            match codec.decode_eof(&mut src) {
                Ok(Some(line)) => {
                    self.replay_line(&line);
                    count += 1;
                }
                Ok(None) => break,
                Err(ScrollbackError::LineTooLong { .. }) => continue,
                Err(error) => return Err(error.into()),
            }
        }
        debug!(count, "replayed scrollback");
        Ok(count)
    }

    fn replay_line(&mut self, line: &ScrollbackLine) {
        let stamp = line.stamp.and_then(|secs| {
            let stamp = Local.timestamp_opt(secs, 0).single();
            if stamp.is_none() {
                warn!(secs, "scrollback timestamp out of range");
            }
            stamp
        });
        self.print_text(&line.text, stamp);
    }
}
