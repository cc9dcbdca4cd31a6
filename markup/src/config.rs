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

/// Renderer settings.
///
/// # Examples
///
/// ```
/// use ircview_markup::RenderConfig;
///
/// let config = RenderConfig::default().with_detect_urls(false);
/// assert!(!config.detect_urls);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderConfig {
    /// Scan each line for link words
    pub detect_urls: bool,
}

impl RenderConfig {
    /// Styles only, no link detection
    pub fn styles_only() -> RenderConfig {
        RenderConfig { detect_urls: false }
    }

    /// Enable or disable link detection
    pub fn with_detect_urls(mut self, enabled: bool) -> Self {
        self.detect_urls = enabled;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { detect_urls: true }
    }
}
