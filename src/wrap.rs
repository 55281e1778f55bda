//! Style-preserving word wrap for `RichText`.
//!
//! Algorithm:
//! 1. Split the text at hard breaks (`\n`).
//! 2. For each segment, concatenate the span text and let `textwrap`
//!    choose the break positions.
//! 3. Locate every wrapped line in the plain text (they are substrings in
//!    order) and cut the original spans at those byte offsets.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::rich::{RichText, StyledSpan};

/// Wraps `text` to `width` columns, returning one `Line` per row.
///
/// Empty text yields no lines. An empty segment between two hard breaks
/// yields an empty line.
pub fn wrap_rich(text: &RichText, width: usize) -> Vec<Line<'static>> {
    if text.is_empty() {
        return Vec::new();
    }
    let width = width.max(1);

    let mut lines = Vec::new();
    for segment in split_hard_breaks(text.spans()) {
        let wrapped = wrap_segment(&segment, width);
        if wrapped.is_empty() {
            lines.push(Line::default());
        } else {
            lines.extend(wrapped);
        }
    }
    lines
}

/// Display width of a line in terminal columns.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// Pads `line` with spaces on the right up to `width` columns.
pub fn pad_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let used = line_width(&line);
    if used < width {
        line.spans.push(Span::raw(" ".repeat(width - used)));
    }
    line
}

fn split_hard_breaks(spans: &[StyledSpan]) -> Vec<Vec<StyledSpan>> {
    let mut groups = Vec::new();
    let mut current: Vec<StyledSpan> = Vec::new();

    for span in spans {
        let mut parts = span.text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(StyledSpan {
                    text: part.to_string(),
                    style: span.style,
                    link: span.link.clone(),
                });
            }
            if parts.peek().is_some() {
                groups.push(std::mem::take(&mut current));
            }
        }
    }
    groups.push(current);
    groups
}

fn wrap_segment(spans: &[StyledSpan], width: usize) -> Vec<Line<'static>> {
    let plain: String = spans.iter().map(|s| s.text.as_str()).collect();
    if plain.trim().is_empty() {
        return Vec::new();
    }

    let options = textwrap::Options::new(width)
        .word_separator(textwrap::WordSeparator::UnicodeBreakProperties);
    let wrapped = textwrap::wrap(&plain, &options);

    let mut result = Vec::with_capacity(wrapped.len());
    let mut cursor = 0;
    for row in &wrapped {
        let start = match plain.get(cursor..).and_then(|rest| rest.find(row.as_ref())) {
            Some(pos) => cursor + pos,
            None => cursor,
        };
        let end = (start + row.len()).min(plain.len());
        result.push(Line::from(slice_spans(spans, start, end)));
        cursor = end;
    }
    result
}

/// Extracts the styled pieces covering plain-text bytes `start..end`.
fn slice_spans(spans: &[StyledSpan], start: usize, end: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut offset = 0;
    for span in spans {
        let span_start = offset;
        let span_end = offset + span.text.len();
        offset = span_end;

        let lo = start.max(span_start);
        let hi = end.min(span_end);
        if lo >= hi {
            continue;
        }
        if let Some(piece) = span.text.get(lo - span_start..hi - span_start) {
            out.push(Span::styled(piece.to_string(), span.style));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Modifier, Style};

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_empty_yields_nothing() {
        assert!(wrap_rich(&RichText::new(), 20).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_rich(&RichText::from("Hello world"), 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(text_of(&lines[0]), "Hello world");
    }

    #[test]
    fn test_wrap_breaks_at_width() {
        let text = RichText::from("word ".repeat(20).trim());
        let lines = wrap_rich(&text, 40);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line_width(line) <= 40);
        }
    }

    #[test]
    fn test_wrap_preserves_styles_across_rows() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let text = RichText::new().styled("word ".repeat(20).trim().to_string(), bold);
        for line in wrap_rich(&text, 30) {
            for span in &line.spans {
                assert!(span.style.add_modifier.contains(Modifier::BOLD));
            }
        }
    }

    #[test]
    fn test_wrap_splits_at_span_boundary() {
        let text = RichText::new().text("I'm a ").highlight("19").text(" year old");
        let lines = wrap_rich(&text, 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[1].content, "19");
    }

    #[test]
    fn test_wrap_hard_breaks() {
        let lines = wrap_rich(&RichText::from("one\n\ntwo"), 80);
        assert_eq!(lines.len(), 3);
        assert_eq!(text_of(&lines[0]), "one");
        assert_eq!(text_of(&lines[1]), "");
        assert_eq!(text_of(&lines[2]), "two");
    }

    #[test]
    fn test_wrap_long_word() {
        let lines = wrap_rich(&RichText::from("abcdefghijklmnopqrstuvwxyz"), 10);
        assert!(lines.len() >= 2);
    }

    #[test]
    fn test_pad_line_fills_width() {
        let line = pad_line(Line::from("abc"), 6);
        assert_eq!(line_width(&line), 6);
    }
}
