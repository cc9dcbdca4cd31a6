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

//! Transcript sessions end to end

use futures::StreamExt;
use ircview_transcript::markup::{StyleState, UrlClassifier, UrlRange, WordKind, render};
use ircview_transcript::{
    LinkError, ScrollbackCodec, ScrollbackLine, TextSink, Transcript, TranscriptConfig,
    apply_urls, insert_spans,
};
use std::cell::RefCell;
use std::ops::Range;
use tokio_util::codec::FramedRead;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Records every sink call.
#[derive(Default)]
struct RecordingSink {
    text: String,
    styles: Vec<(Range<usize>, StyleState)>,
    urls: Vec<UrlRange>,
}

impl TextSink for RecordingSink {
    fn end_offset(&self) -> usize {
        self.text.chars().count()
    }

    fn insert(&mut self, text: &str) -> usize {
        let offset = self.end_offset();
        self.text.push_str(text);
        offset
    }

    fn apply_style(&mut self, range: Range<usize>, style: &StyleState) {
        if !style.is_plain() {
            self.styles.push((range, *style));
        }
    }

    fn apply_url(&mut self, url: &UrlRange) {
        self.urls.push(url.clone());
    }
}

#[test]
fn test_custom_sink_receives_spans() {
    let mut sink = RecordingSink::default();
    sink.insert("> ");
    let line = render(
        "\x0304alert\x03 see https://example.org",
        sink.end_offset(),
        &UrlClassifier,
    );
    insert_spans(&mut sink, line.spans());
    apply_urls(&mut sink, line.urls());

    assert_eq!(sink.text, "> alert see https://example.org");
    assert_eq!(sink.styles.len(), 1);
    assert_eq!(sink.styles[0].0, 2..7);
    assert_eq!(sink.urls.len(), 1);
    assert_eq!(sink.urls[0].range(), 12..31);
    assert_eq!(sink.urls[0].kind(), WordKind::Generic);
}

#[test]
fn test_session_with_links_and_marker() {
    init_logging();
    let config = TranscriptConfig::default().with_stamp_text(false);
    let mut transcript = Transcript::new(config).unwrap();

    transcript.print_text("\x0302<bob>\x0f\tread ~/notes.txt or /srv/notes.txt", None);
    transcript.print_text("<amy>\tmirror at [2001:db8::1]:8080/files", None);
    transcript.set_marker();
    transcript.print_text("<bob>\tthanks", None);

    let buffer = transcript.buffer();
    assert_eq!(buffer.line(0), Some("<bob> read ~/notes.txt or /srv/notes.txt"));
    assert_eq!(buffer.line(1), Some("<amy> mirror at [2001:db8::1]:8080/files"));
    assert_eq!(buffer.line_count(), 3);

    let opened = RefCell::new(Vec::new());
    let opener = |uri: &str| {
        opened.borrow_mut().push(uri.to_string());
        Ok::<(), LinkError>(())
    };
    assert!(!transcript.activate_link(12, &opener).unwrap());
    assert!(transcript.activate_link(27, &opener).unwrap());
    let second_line = buffer.line_start(1);
    assert!(transcript.activate_link(second_line + 20, &opener).unwrap());
    assert_eq!(
        opened.into_inner(),
        vec![
            "file:///srv/notes.txt".to_string(),
            "http://[2001:db8::1]:8080/files".to_string()
        ]
    );

    assert!(transcript.draw_marker());
    let marked = transcript.marker_range().unwrap();
    assert_eq!(transcript.buffer().slice(marked), "<amy> mirror at [2001:db8::1]:8080/files");
}

#[tokio::test]
async fn test_replay_from_framed_reader() {
    init_logging();
    let data: &[u8] = b"T 1700000000 \x02first\x02\r\nunstamped line\nT 1700000060 last";
    let lines: Vec<ScrollbackLine> = FramedRead::new(data, ScrollbackCodec::new())
        .filter_map(|line| async move { line.ok() })
        .collect()
        .await;
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], ScrollbackLine::new(1_700_000_000, "\x02first\x02"));
    assert_eq!(lines[1], ScrollbackLine::unstamped("unstamped line"));

    let config = TranscriptConfig::default().with_stamp_text(false);
    let mut transcript = Transcript::new(config).unwrap();
    assert_eq!(transcript.replay(lines), 3);
    assert_eq!(transcript.buffer().text(), "first\nunstamped line\nlast\n");
    assert!(transcript.buffer().styles_at(0).is_some_and(|style| style.bold));
}

#[test]
fn test_bounded_scrollback() {
    let config = TranscriptConfig::default()
        .with_stamp_format("%H:%M ")
        .with_max_lines(Some(100));
    let mut transcript = Transcript::new(config).unwrap();
    for index in 0..250 {
        transcript.print_text(&format!("line {index} http://host{index}.example.com"), None);
    }
    let buffer = transcript.buffer();
    assert_eq!(buffer.line_count(), 100);
    assert!(buffer.line(0).is_some_and(|line| line.contains("line 150 ")));
    assert_eq!(buffer.urls().len(), 100);
    assert!(buffer.urls().iter().all(|url| url.end() <= buffer.len_chars()));
}
