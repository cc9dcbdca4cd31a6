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

//! URL word detection and link resolution.
//!
//! A line is split into whitespace-delimited words after control codes are
//! removed. Control codes inside a word are transparent: `http://\x02example\x02.com`
//! is still the single word `http://example.com`. Whitespace and the tab
//! separator always end a word.

use crate::parser::{ControlCode, ControlScanner, Token};
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::ops::Range;
use std::sync::LazyLock;

/// How a word resembles a link target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// Not a link
    #[default]
    None,
    /// A filesystem path
    Path,
    /// A host name or IPv4 address, optionally with port and path
    Host,
    /// An IPv6 literal, bare or bracketed
    Host6,
    /// A URL or URI with an explicit scheme
    Generic,
}

impl WordKind {
    /// Returns `true` for every kind except [`WordKind::None`].
    pub fn is_link(&self) -> bool {
        !matches!(self, WordKind::None)
    }
}

/// Decides whether a plain-text word is a link target.
pub trait WordClassifier {
    /// Classifies one word with all control codes already removed.
    fn classify(&self, word: &str) -> WordKind;
}

impl<F> WordClassifier for F
where
    F: Fn(&str) -> WordKind,
{
    fn classify(&self, word: &str) -> WordKind {
        self(word)
    }
}

static SCHEME_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?i:file):///[^\s/]\S*|[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+\S*)$")
        .expect("scheme url pattern")
});

static OPAQUE_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:mailto|irc|ircs|magnet|news|xmpp|sip|tel|urn):[^\s/]\S*$")
        .expect("opaque uri pattern")
});

static UNIX_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^\s/]\S*$").expect("unix path pattern"));

static WINDOWS_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]:\\\S+$").expect("windows path pattern"));

static HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<host>(?:[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])?\.)+(?P<tld>[a-z]{2,24}))(?::\d{1,5})?(?:/\S*)?$",
    )
    .expect("host pattern")
});

static IPV4_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<addr>\d{1,3}(?:\.\d{1,3}){3})(?::\d{1,5})?(?:/\S*)?$").expect("ipv4 pattern")
});

static BRACKETED_IPV6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<addr>[0-9A-Fa-f:.]+)\](?::\d{1,5})?(?:/\S*)?$").expect("ipv6 pattern")
});

/// Generic top-level domains accepted alongside every two-letter country code.
const GENERIC_TLDS: &[&str] = &[
    "app", "arpa", "biz", "blog", "chat", "cloud", "club", "com", "coop", "dev", "edu", "gov",
    "info", "int", "mil", "museum", "name", "net", "network", "news", "online", "org", "page",
    "pro", "site", "social", "space", "store", "tech", "xyz", "zone",
];

/// The stock classifier.
///
/// Recognizes, in order of precedence:
/// - URLs with an explicit `scheme://` and opaque URIs such as `mailto:` ([`WordKind::Generic`])
/// - absolute Unix paths and drive-letter paths ([`WordKind::Path`])
/// - IPv6 literals, bracketed or bare ([`WordKind::Host6`])
/// - dotted host names ending in a known top-level domain and IPv4 addresses
///   ([`WordKind::Host`])
#[derive(Copy, Clone, Debug, Default)]
pub struct UrlClassifier;

impl UrlClassifier {
    /// Creates the stock classifier.
    pub fn new() -> Self {
        Self
    }

    fn is_host6(word: &str) -> bool {
        if let Some(captures) = BRACKETED_IPV6.captures(word) {
            return captures["addr"].parse::<Ipv6Addr>().is_ok();
        }
        word.contains(|c: char| c.is_ascii_hexdigit()) && word.parse::<Ipv6Addr>().is_ok()
    }

    fn is_host(word: &str) -> bool {
        if let Some(captures) = IPV4_HOST.captures(word) {
            return captures["addr"].parse::<Ipv4Addr>().is_ok();
        }
        match HOST.captures(word) {
            Some(captures) => {
                let tld = captures["tld"].to_ascii_lowercase();
                let host = captures["host"].to_ascii_lowercase();
                tld.len() == 2 || GENERIC_TLDS.contains(&tld.as_str()) || host.starts_with("www.")
            }
            None => false,
        }
    }
}

impl WordClassifier for UrlClassifier {
    fn classify(&self, word: &str) -> WordKind {
        if SCHEME_URL.is_match(word) || OPAQUE_URI.is_match(word) {
            WordKind::Generic
        } else if UNIX_PATH.is_match(word) || WINDOWS_PATH.is_match(word) {
            WordKind::Path
        } else if Self::is_host6(word) {
            WordKind::Host6
        } else if Self::is_host(word) {
            WordKind::Host
        } else {
            WordKind::None
        }
    }
}

/// Builds the URI handed to a link opener for a classified word.
///
/// - paths get a `file://` prefix
/// - IPv6 literals are bracketed (unless they already are) and get `http://`
/// - any other word without a `:` gets `http://`
/// - everything else passes through unchanged
pub fn resolve_uri(word: &str, kind: WordKind) -> String {
    match kind {
        WordKind::Path => format!("file://{}", word),
        WordKind::Host6 if word.starts_with('[') => format!("http://{}", word),
        WordKind::Host6 => format!("http://[{}]", word),
        _ if !word.contains(':') => format!("http://{}", word),
        _ => word.to_string(),
    }
}

/// A recognized link in visible-text coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlRange {
    range: Range<usize>,
    kind: WordKind,
    text: String,
}

impl UrlRange {
    /// Creates a URL range over `range` for the visible word `text`.
    pub fn new(range: Range<usize>, kind: WordKind, text: impl Into<String>) -> Self {
        Self {
            range,
            kind,
            text: text.into(),
        }
    }

    /// Visible character range, including the line start offset.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// First visible offset of the word.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Visible offset one past the end of the word.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// How the classifier saw the word.
    pub fn kind(&self) -> WordKind {
        self.kind
    }

    /// The word with control codes removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The URI a link opener should receive.
    pub fn uri(&self) -> String {
        resolve_uri(&self.text, self.kind)
    }

    /// Moves the range `delta` characters towards the start of the buffer.
    ///
    /// Returns `None` when the whole range falls before the cut.
    pub fn shifted_back(&self, delta: usize) -> Option<UrlRange> {
        if self.range.end <= delta {
            return None;
        }
        Some(UrlRange {
            range: self.range.start.saturating_sub(delta)..self.range.end - delta,
            kind: self.kind,
            text: self.text.clone(),
        })
    }
}

fn is_word_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

struct WordCollector<'c, C: ?Sized> {
    classifier: &'c C,
    word: String,
    start: usize,
    cursor: usize,
    urls: Vec<UrlRange>,
}

impl<C: WordClassifier + ?Sized> WordCollector<'_, C> {
    fn push_char(&mut self, ch: char) {
        if self.word.is_empty() {
            self.start = self.cursor;
        }
        self.word.push(ch);
        self.cursor += 1;
    }

    fn separator(&mut self) {
        self.finish_word();
        self.cursor += 1;
    }

    fn finish_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let kind = self.classifier.classify(&self.word);
        if kind.is_link() {
            self.urls.push(UrlRange::new(
                self.start..self.cursor,
                kind,
                std::mem::take(&mut self.word),
            ));
        } else {
            self.word.clear();
        }
    }
}

/// Finds every link word in a raw line.
///
/// Ranges are in visible characters and start at `line_start_offset`, the
/// position the line's first visible character occupies in the sink.
///
/// # Examples
///
/// ```
/// use ircview_markup::{UrlClassifier, WordKind, detect_urls};
///
/// let urls = detect_urls("check http://example.com please", 0, &UrlClassifier);
/// assert_eq!(urls.len(), 1);
/// assert_eq!(urls[0].range(), 6..24);
/// assert_eq!(urls[0].kind(), WordKind::Generic);
/// ```
pub fn detect_urls<C>(raw: &str, line_start_offset: usize, classifier: &C) -> Vec<UrlRange>
where
    C: WordClassifier + ?Sized,
{
    let mut collector = WordCollector {
        classifier,
        word: String::new(),
        start: line_start_offset,
        cursor: line_start_offset,
        urls: Vec::new(),
    };

    for token in ControlScanner::new(raw) {
        match token {
            Token::Text { text, .. } => {
                for ch in text.chars() {
                    if is_word_separator(ch) {
                        collector.separator();
                    } else {
                        collector.push_char(ch);
                    }
                }
            }
            Token::Control {
                code: ControlCode::Tab,
                ..
            } => collector.separator(),
            Token::Control { .. } => {}
        }
    }
    collector.finish_word();
    collector.urls
}
