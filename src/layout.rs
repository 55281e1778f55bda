//! Layout engine: flattens a `Transcript` into `DocumentLine`s for rendering.
//!
//! Everything is laid out here for a given terminal width, command lines
//! included. Only the last line of a blinking prompt stays dynamic
//! (`DocumentLine::Prompt`); the renderer adds its cursor per frame.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::prompt::{PromptTag, command_lines};
use crate::rich::{RichText, chrome};
use crate::row::{NARROW_WIDTH, RowLayout, render_row_with};
use crate::transcript::{ListItem, ResponseItem, Transcript, Unit};
use crate::wrap::{line_width, pad_line, wrap_rich};

/// A pre-rendered document ready for viewport slicing and rendering.
///
/// Contains all lines laid out for a specific terminal width. Created
/// on mount and again on terminal resize.
pub struct PreRenderedDocument {
    /// All document lines in display order.
    pub lines: Vec<DocumentLine>,
    /// Total number of lines (== `lines.len()`).
    pub total_height: usize,
    /// Number of prompt lines with a blinking cursor.
    pub blinking: usize,
}

/// A single line of the pre-rendered document.
///
/// The renderer matches on this enum exhaustively to produce frame output.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentLine {
    /// A line of styled response text.
    Text(Line<'static>),
    /// The last line of a command line with a blinking cursor. `blink`
    /// indexes the page's cursor timers.
    Prompt { line: Line<'static>, blink: usize },
    /// An empty line used for spacing.
    Empty,
    /// A horizontal rule spanning the terminal width.
    Rule,
}

/// Knobs that change how content is laid out.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    /// Stack argument rows even on wide terminals.
    pub force_narrow: bool,
}

const SECTION_PADDING: usize = 4;

/// Flattens a transcript into a `PreRenderedDocument` at `width` columns.
///
/// Block prompts and response blocks are preceded by one empty line
/// (except at the very top); inline prompts follow directly.
pub fn flatten(transcript: &Transcript, width: u16, options: LayoutOptions) -> PreRenderedDocument {
    let mut lines: Vec<DocumentLine> = Vec::new();
    let mut blinking = 0;
    let width = width as usize;

    for (i, unit) in transcript.units().iter().enumerate() {
        match unit {
            Unit::Command(entry) => {
                if i > 0 && entry.tag == PromptTag::Block {
                    lines.push(DocumentLine::Empty);
                }
                let mut rendered = command_lines(entry, width);
                let last = rendered.pop();
                lines.extend(rendered.into_iter().map(DocumentLine::Text));
                match last {
                    Some(line) if entry.show_cursor => {
                        lines.push(DocumentLine::Prompt {
                            line,
                            blink: blinking,
                        });
                        blinking += 1;
                    }
                    Some(line) => lines.push(DocumentLine::Text(line)),
                    None => {}
                }
            }
            Unit::Response(block) => {
                for item in &block.items {
                    if !lines.is_empty() {
                        lines.push(DocumentLine::Empty);
                    }
                    match item {
                        ResponseItem::Rule => lines.push(DocumentLine::Rule),
                        ResponseItem::Spacer(count) => {
                            lines.extend((0..*count).map(|_| DocumentLine::Empty));
                        }
                        other => lines.extend(
                            item_lines(other, width, options)
                                .into_iter()
                                .map(text_or_empty),
                        ),
                    }
                }
            }
        }
    }

    let total_height = lines.len();
    PreRenderedDocument {
        lines,
        total_height,
        blinking,
    }
}

fn text_or_empty(line: Line<'static>) -> DocumentLine {
    if line.spans.iter().all(|s| s.content.is_empty()) {
        DocumentLine::Empty
    } else {
        DocumentLine::Text(line)
    }
}

/// Lays out one response item as plain lines at `width` columns.
fn item_lines(item: &ResponseItem, width: usize, options: LayoutOptions) -> Vec<Line<'static>> {
    match item {
        ResponseItem::Paragraph(text) => non_empty(wrap_rich(text, width)),
        ResponseItem::Heading(text) => non_empty(wrap_rich(
            &text.with_base_style(Style::default().add_modifier(Modifier::BOLD)),
            width,
        )),
        ResponseItem::List(items) => list_lines(items, width),
        ResponseItem::Arguments(rows) => {
            let layout = RowLayout::for_width(clamp_u16(width), options.force_narrow);
            let mut lines = Vec::new();
            for (i, row) in rows.iter().enumerate() {
                if i > 0 && layout == RowLayout::Stacked {
                    lines.push(Line::default());
                }
                lines.extend(render_row_with(row, clamp_u16(width), layout));
            }
            lines
        }
        ResponseItem::Section { legend, items } => section_lines(legend, items, width, options),
        ResponseItem::Links(entries) => links_lines(entries, width),
        ResponseItem::Rule => vec![Line::from(Span::styled("─".repeat(width), chrome()))],
        ResponseItem::Spacer(count) => (0..*count).map(|_| Line::default()).collect(),
    }
}

fn non_empty(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    if lines.is_empty() {
        vec![Line::default()]
    } else {
        lines
    }
}

fn clamp_u16(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Bulleted list. Continuation lines hang under the item text.
fn list_lines(items: &[ListItem], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for item in items {
        let bullet = if item.depth == 0 { "• " } else { "◦ " };
        let prefix = format!("{}{}", "  ".repeat(item.depth as usize), bullet);
        let indent = prefix.width();
        let wrapped = wrap_rich(&item.text, width.saturating_sub(indent).max(1));
        for (i, line) in non_empty(wrapped).into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(prefix.clone(), chrome())
            } else {
                Span::raw(" ".repeat(indent))
            };
            let mut spans = vec![lead];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }
    lines
}

/// A bordered fieldset with the legend set into the top border.
fn section_lines(
    legend: &str,
    items: &[ResponseItem],
    width: usize,
    options: LayoutOptions,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(SECTION_PADDING).max(1);
    let border = chrome();

    let title = format!(" {legend} ");
    let fill = width.saturating_sub(title.width() + 3);
    let mut lines = vec![Line::from(vec![
        Span::styled("╭─", border),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("{}╮", "─".repeat(fill)), border),
    ])];

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            lines.push(framed(Line::default(), inner, border));
        }
        for line in item_lines(item, inner, options) {
            lines.push(framed(line, inner, border));
        }
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width.saturating_sub(2))),
        border,
    )));
    lines
}

fn framed(line: Line<'static>, inner: usize, border: Style) -> Line<'static> {
    let mut spans = vec![Span::styled("│ ", border)];
    spans.extend(pad_line(line, inner).spans);
    spans.push(Span::styled(" │", border));
    Line::from(spans)
}

/// Entries spread across one row, or one per line when they do not fit.
fn links_lines(entries: &[RichText], width: usize) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return Vec::new();
    }
    let cells: Vec<Line<'static>> = entries
        .iter()
        .map(|e| Line::from(e.spans().iter().map(|s| s.to_span()).collect::<Vec<_>>()))
        .collect();

    let slot = width / cells.len();
    let fits = width >= NARROW_WIDTH as usize && cells.iter().all(|c| line_width(c) < slot);
    if !fits {
        return cells;
    }

    let mut spans = Vec::new();
    for cell in cells {
        let lead = (slot - line_width(&cell)) / 2;
        spans.push(Span::raw(" ".repeat(lead)));
        spans.extend(pad_line(cell, slot - lead).spans);
    }
    vec![Line::from(spans)]
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
