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

//! Line codec for stored scrollback.
//!
//! Each record is one line: `T <unix-seconds> <text>\n`. Lines without the `T `
//! prefix carry no timestamp.

use bytes::{Buf, BufMut, BytesMut};
use std::fmt;
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, warn};

/// Default upper bound on a single record, in bytes
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8192;

const STAMP_PREFIX: &[u8] = b"T ";

/// Scrollback codec errors
#[derive(Debug, Error)]
pub enum ScrollbackError {
    /// I/O error from the underlying reader
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record exceeded the maximum length and was discarded
    #[error("Line of {length} bytes exceeds maximum of {max}")]
    LineTooLong {
        /// Bytes seen before giving up
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

/// One stored line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollbackLine {
    /// Unix timestamp in seconds
    pub stamp: Option<i64>,
    /// Raw line text, control codes included
    pub text: String,
}

impl ScrollbackLine {
    /// A line with a timestamp
    pub fn new(stamp: i64, text: impl Into<String>) -> Self {
        Self {
            stamp: Some(stamp),
            text: text.into(),
        }
    }

    /// A line without a timestamp
    pub fn unstamped(text: impl Into<String>) -> Self {
        Self {
            stamp: None,
            text: text.into(),
        }
    }

    fn parse(line: &[u8]) -> Self {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if let Some(rest) = line.strip_prefix(STAMP_PREFIX) {
            let rest = String::from_utf8_lossy(rest);
            let (stamp, body) = rest.split_once(' ').unwrap_or((&*rest, ""));
            if let Ok(stamp) = stamp.parse::<i64>() {
                return Self::new(stamp, body);
            }
        }
        Self::unstamped(String::from_utf8_lossy(line))
    }
}

impl fmt::Display for ScrollbackLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stamp {
            Some(stamp) => write!(f, "T {} {}", stamp, self.text),
            None => f.write_str(&self.text),
        }
    }
}

/// Scrollback Codec
///
/// Frames `\n`-terminated records into [`ScrollbackLine`]s. A record longer
/// than the maximum yields [`ScrollbackError::LineTooLong`] once, and the rest
/// of it is skipped up to the next newline.
#[derive(Clone, Debug)]
pub struct ScrollbackCodec {
    max_line_length: usize,
    next_index: usize,
    discarding: bool,
}

impl ScrollbackCodec {
    /// Creates a codec with the default maximum line length
    pub fn new() -> Self {
        Self::with_max_line_length(DEFAULT_MAX_LINE_LENGTH)
    }

    /// Creates a codec with a custom maximum line length
    pub fn with_max_line_length(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            next_index: 0,
            discarding: false,
        }
    }

    /// Configured maximum line length
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }
}

impl Default for ScrollbackCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for ScrollbackCodec {
    type Item = ScrollbackLine;
    type Error = ScrollbackError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<ScrollbackLine>, Self::Error> {
        loop {
            let read_to = src.len().min(self.max_line_length.saturating_add(1));
            let newline = src[self.next_index..read_to]
                .iter()
                .position(|byte| *byte == b'\n');

            match (self.discarding, newline) {
                (true, Some(offset)) => {
                    src.advance(self.next_index + offset + 1);
                    self.discarding = false;
                    self.next_index = 0;
                    debug!("resynchronized after overlong scrollback line");
                }
                (true, None) => {
                    src.advance(read_to);
                    self.next_index = 0;
                    if src.is_empty() {
                        return Ok(None);
                    }
                }
                (false, Some(offset)) => {
                    let end = self.next_index + offset;
                    self.next_index = 0;
                    let line = src.split_to(end + 1);
                    return Ok(Some(ScrollbackLine::parse(&line[..end])));
                }
                (false, None) if src.len() > self.max_line_length => {
                    self.discarding = true;
                    warn!(
                        length = src.len(),
                        max = self.max_line_length,
                        "discarding overlong scrollback line"
                    );
                    return Err(ScrollbackError::LineTooLong {
                        length: src.len(),
                        max: self.max_line_length,
                    });
                }
                (false, None) => {
                    self.next_index = read_to;
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<ScrollbackLine>, Self::Error> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() || self.discarding {
            src.clear();
            self.discarding = false;
            self.next_index = 0;
            return Ok(None);
        }
        let line = src.split_to(src.len());
        self.next_index = 0;
        Ok(Some(ScrollbackLine::parse(&line)))
    }
}

impl Encoder<ScrollbackLine> for ScrollbackCodec {
    type Error = ScrollbackError;

    fn encode(&mut self, item: ScrollbackLine, dst: &mut BytesMut) -> Result<(), Self::Error> {
        Encoder::<&ScrollbackLine>::encode(self, &item, dst)
    }
}

impl Encoder<&ScrollbackLine> for ScrollbackCodec {
    type Error = ScrollbackError;

    fn encode(&mut self, item: &ScrollbackLine, dst: &mut BytesMut) -> Result<(), Self::Error> {
        // Embedded line breaks would split the record.
        let text = item.text.trim_end_matches(['\r', '\n']).replace(['\r', '\n'], " ");
        let record = match item.stamp {
            Some(stamp) => format!("T {} {}", stamp, text),
            None => text,
        };
        if record.len() > self.max_line_length {
            return Err(ScrollbackError::LineTooLong {
                length: record.len(),
                max: self.max_line_length,
            });
        }
        dst.reserve(record.len() + 1);
        dst.put_slice(record.as_bytes());
        dst.put_u8(b'\n');
        Ok(())
    }
}
