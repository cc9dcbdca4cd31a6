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

//! End-to-end rendering of realistic chat lines

use ircview_markup::{
    ColorIndex, RenderConfig, Renderer, StyleState, UrlClassifier, WordKind, render,
    strip_irc_codes,
};

fn renderer() -> Renderer {
    Renderer::new()
}

#[test]
fn test_render_chat_line_with_nick_column() {
    let line = renderer().render("\x0302<alice>\x0f\tsee https://rust-lang.org today", 0);
    let spans = line.spans();
    assert_eq!(spans.len(), 2);

    assert_eq!(spans[0].text(), "<alice>");
    assert_eq!(spans[0].style().foreground, Some(ColorIndex::new(2)));
    assert_eq!(spans[1].text(), " see https://rust-lang.org today");
    assert!(spans[1].style().is_plain());

    let urls = line.urls();
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].text(), "https://rust-lang.org");
    assert_eq!(urls[0].range(), 12..33);
    assert_eq!(urls[0].uri(), "https://rust-lang.org");
}

#[test]
fn test_render_at_line_start_offset() {
    let line = render("[12:00:00] \x02hi\x02", 11, &UrlClassifier);
    assert_eq!(line.spans()[0].range(), 11..22);
    assert_eq!(line.spans()[1].range(), 22..24);
    assert_eq!(line.len_chars(), 13);
}

#[test]
fn test_visible_text_matches_strip() {
    let raw = "\x02\x1dmixed\x0f \x034,5colors\x03 and\ttabs \x16rev";
    let line = renderer().render(raw, 0);
    assert_eq!(line.visible_text(), strip_irc_codes(raw));
}

#[test]
fn test_nested_styles_accumulate() {
    let line = renderer().render("\x02a\x1db\x1fc\x02d", 0);
    let styles: Vec<StyleState> = line.spans().iter().map(|span| *span.style()).collect();
    assert!(styles[0].bold && !styles[0].italic);
    assert!(styles[1].bold && styles[1].italic);
    assert!(styles[2].bold && styles[2].italic && styles[2].underline);
    assert!(!styles[3].bold && styles[3].italic && styles[3].underline);
}

#[test]
fn test_foreground_only_keeps_background() {
    let line = renderer().render("\x033,4a\x035b", 0);
    let second = line.spans()[1].style();
    assert_eq!(second.foreground, Some(ColorIndex::new(5)));
    assert_eq!(second.background, Some(ColorIndex::new(4)));
}

#[test]
fn test_line_of_only_codes_renders_nothing() {
    let line = renderer().render("\x02\x03\x0f\x1d", 0);
    assert!(line.is_empty());
    assert!(line.urls().is_empty());
}

#[test]
fn test_multiple_link_kinds() {
    let line = renderer().render("go to www.example.com or /usr/share/doc or [::1]", 0);
    let kinds: Vec<WordKind> = line.urls().iter().map(|url| url.kind()).collect();
    assert_eq!(kinds, vec![WordKind::Host, WordKind::Path, WordKind::Host6]);
    assert_eq!(line.urls()[0].uri(), "http://www.example.com");
    assert_eq!(line.urls()[1].uri(), "file:///usr/share/doc");
    assert_eq!(line.urls()[2].uri(), "http://[::1]");
}

#[test]
fn test_colored_url_range_skips_codes() {
    let line = renderer().render("\x0312http://example.com/x\x03 done", 0);
    assert_eq!(line.urls().len(), 1);
    assert_eq!(line.urls()[0].range(), 0..20);
    assert_eq!(line.spans()[0].range(), 0..20);
}

#[test]
fn test_custom_classifier_closure() {
    let classifier = |word: &str| {
        if word.starts_with('#') {
            WordKind::Generic
        } else {
            WordKind::None
        }
    };
    let renderer = Renderer::with_classifier(RenderConfig::default(), classifier);
    let line = renderer.render("join #rust now", 0);
    assert_eq!(line.urls().len(), 1);
    assert_eq!(line.urls()[0].text(), "#rust");
    assert_eq!(line.urls()[0].range(), 5..10);
}

#[test]
fn test_palette_color_lookup() {
    let line = renderer().render("\x0304,01alert", 0);
    let style = line.spans()[0].style();
    assert_eq!(style.foreground.map(|c| c.hex()), Some("#FF0000".to_string()));
    assert_eq!(style.background.map(|c| c.hex()), Some("#000000".to_string()));
}
