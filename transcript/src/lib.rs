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

//! A styled, link-aware transcript for IRC chat sessions.
//!
//! [`Transcript`] renders each incoming line with [`ircview_markup`], appends
//! it to a [`TranscriptBuffer`] through the [`TextSink`] interface, tags links
//! and timestamps, and keeps the read marker. [`ScrollbackCodec`] frames stored
//! lines for replay.

mod buffer;
mod config;
mod link;
mod result;
mod scrollback;
mod sink;
mod transcript;

pub use self::buffer::TranscriptBuffer;
pub use self::config::{DEFAULT_STAMP_FORMAT, TranscriptConfig};
pub use self::link::{LinkError, LinkOpener, SystemOpener};
pub use self::result::{TranscriptError, TranscriptResult};
pub use self::scrollback::{
    DEFAULT_MAX_LINE_LENGTH, ScrollbackCodec, ScrollbackError, ScrollbackLine,
};
pub use self::sink::{TextSink, apply_urls, insert_spans};
pub use self::transcript::Transcript;

pub use ircview_markup as markup;
