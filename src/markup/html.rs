//! HTML rendering of annotated text
//!
//! All source text is escaped. Styled segments become
//! `<span class="tok-..." style="color: ...;">`; overlay regions become an
//! outer `<span class="pattern-highlight ...">`. Every span is closed
//! before a line break and reopened after it, so no emitted span contains
//! a `\n` and line-based decoration stays aligned with the source lines.

use crate::patterns::{OverlayKind, OverlayRange};
use crate::syntax::{AnnotatedText, TokenType};

/// Escape text for inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Recover the source text from rendered markup
///
/// Drops every tag and reverses `escape_html`. Line number markers are
/// content, not tags, so strip them before calling this on decorated
/// markup.
pub fn markup_to_text(markup: &str) -> String {
    let mut stripped = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(c),
            _ => {}
        }
    }

    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Render annotated text to HTML, with optional overlay regions
///
/// `overlays` must be sorted and non-overlapping, as returned by
/// `pattern_overlay`.
pub fn to_html(text: &AnnotatedText, overlays: &[OverlayRange]) -> String {
    let mut writer = HtmlWriter::default();
    let mut offset = 0;

    for segment in text.segments() {
        let start = offset;
        let end = offset + segment.text.len();

        // Cut the segment wherever an overlay starts or ends inside it
        let mut cuts = vec![start, end];
        for overlay in overlays {
            for edge in [overlay.range.start, overlay.range.end] {
                if edge > start && edge < end {
                    cuts.push(edge);
                }
            }
        }
        cuts.sort_unstable();
        cuts.dedup();

        for pair in cuts.windows(2) {
            let piece = &segment.text[pair[0] - start..pair[1] - start];
            writer.set_overlay(overlay_at(overlays, pair[0]));
            writer.write_piece(piece, segment.token);
        }

        offset = end;
    }

    writer.finish()
}

/// The overlay covering a byte offset, if any
fn overlay_at(overlays: &[OverlayRange], pos: usize) -> Option<OverlayKind> {
    let idx = overlays.partition_point(|o| o.range.end <= pos);
    overlays
        .get(idx)
        .filter(|o| o.range.start <= pos)
        .map(|o| o.kind)
}

#[derive(Default)]
struct HtmlWriter {
    out: String,
    overlay: Option<OverlayKind>,
}

impl HtmlWriter {
    fn set_overlay(&mut self, overlay: Option<OverlayKind>) {
        if self.overlay == overlay {
            return;
        }
        self.close_overlay();
        self.overlay = overlay;
        self.open_overlay();
    }

    fn open_overlay(&mut self) {
        if let Some(kind) = self.overlay {
            self.out.push_str(&format!("<span class=\"{}\">", kind.class_attr()));
        }
    }

    fn close_overlay(&mut self) {
        if self.overlay.is_some() {
            self.out.push_str("</span>");
        }
    }

    fn write_piece(&mut self, text: &str, token: Option<TokenType>) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.close_overlay();
                self.out.push('\n');
                self.open_overlay();
            }
            if line.is_empty() {
                continue;
            }
            match token {
                Some(token) => {
                    self.out.push_str(&format!(
                        "<span class=\"{}\" style=\"color: {};\">{}</span>",
                        token.class_name(),
                        token.hex_color(),
                        escape_html(line)
                    ));
                }
                None => self.out.push_str(&escape_html(line)),
            }
        }
    }

    fn finish(mut self) -> String {
        self.close_overlay();
        self.out
    }
}
