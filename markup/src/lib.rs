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

//! Inline IRC formatting: control-code scanning, styled spans and link detection.
//!
//! [`render`] turns one raw line into [`StyledSpan`]s and [`UrlRange`]s that a
//! display sink can insert and tag. Rendering is pure and total; every byte is
//! either a control code or literal text.

mod config;
pub mod consts;
mod palette;
mod parser;
mod render;
mod style;
mod url;
pub mod utility;

pub use self::config::RenderConfig;
pub use self::palette::{ColorIndex, PALETTE, Rgb};
pub use self::parser::{ControlCode, ControlScanner, Token};
pub use self::render::{RenderedLine, Renderer, StyledSpan, render, render_bytes, render_spans};
pub use self::style::StyleState;
pub use self::url::{
    UrlClassifier, UrlRange, WordClassifier, WordKind, detect_urls, resolve_uri,
};
pub use self::utility::strip_irc_codes;
