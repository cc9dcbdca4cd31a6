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

//! Transcript configuration

use crate::result::{TranscriptError, TranscriptResult};
use chrono::format::{Item, StrftimeItems};

/// Default timestamp format, strftime syntax
pub const DEFAULT_STAMP_FORMAT: &str = "[%H:%M:%S] ";

/// Configuration for a [`Transcript`](crate::Transcript)
///
/// # Examples
///
/// ```
/// use ircview_transcript::TranscriptConfig;
///
/// let config = TranscriptConfig::default()
///     .with_stamp_format("%H:%M ")
///     .with_max_lines(Some(500));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TranscriptConfig {
    /// Prefix every line with a timestamp
    pub stamp_text: bool,

    /// strftime format for the timestamp; an empty format disables stamps
    pub stamp_format: String,

    /// Enable the read marker line
    pub show_marker: bool,

    /// Oldest lines are cleared once the buffer holds more than this many
    pub max_lines: Option<usize>,
}

impl TranscriptConfig {
    /// Enable or disable timestamps
    pub fn with_stamp_text(mut self, enabled: bool) -> Self {
        self.stamp_text = enabled;
        self
    }

    /// Set the timestamp format
    pub fn with_stamp_format(mut self, format: impl Into<String>) -> Self {
        self.stamp_format = format.into();
        self
    }

    /// Enable or disable the read marker
    pub fn with_show_marker(mut self, enabled: bool) -> Self {
        self.show_marker = enabled;
        self
    }

    /// Set the scrollback limit
    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Returns `true` when lines get a timestamp prefix.
    pub fn stamps_enabled(&self) -> bool {
        self.stamp_text && !self.stamp_format.is_empty()
    }

    /// Validate the configuration
    pub fn validate(&self) -> TranscriptResult<()> {
        if StrftimeItems::new(&self.stamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(TranscriptError::InvalidStampFormat(self.stamp_format.clone()));
        }
        Ok(())
    }
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            stamp_text: true,
            stamp_format: DEFAULT_STAMP_FORMAT.to_string(),
            show_marker: true,
            max_lines: None,
        }
    }
}
