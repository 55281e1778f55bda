//! Argument row renderer: lays out one descriptor as an aligned table row.
//!
//! A row has five slots in fixed order: required marker, name, kind,
//! description, and a trailing annotation segment. Slot widths are
//! proportional to the row width, so every row in a group lines up. The
//! marker slot is always reserved. Below `NARROW_WIDTH` the slots stack
//! vertically instead.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::descriptor::ArgumentDescriptor;
use crate::rich::{RichText, neutral, palette};
use crate::wrap::{pad_line, wrap_rich};

/// Rows narrower than this use the stacked layout.
pub const NARROW_WIDTH: u16 = 60;

/// Glyph shown in the marker slot of required arguments.
pub const REQUIRED_MARKER: &str = "*";

/// Annotation appended to required arguments.
pub const REQUIRED_ANNOTATION: &str = "[required]";

const MARKER_WIDTH: usize = 2;
const NAME_PERCENT: usize = 18;
const KIND_PERCENT: usize = 10;
const DESCRIPTION_PERCENT: usize = 30;
const GAP: usize = 1;
const STACK_INDENT: usize = 4;

/// How a row group is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// Slots side by side.
    Columns,
    /// Slots on successive lines.
    Stacked,
}

impl RowLayout {
    /// Picks the layout for `width`; `force_narrow` always stacks.
    pub fn for_width(width: u16, force_narrow: bool) -> Self {
        if force_narrow || width < NARROW_WIDTH {
            RowLayout::Stacked
        } else {
            RowLayout::Columns
        }
    }
}

/// The five slot contents of a row, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub marker: RichText,
    pub name: RichText,
    pub kind: RichText,
    pub description: RichText,
    pub trailing: RichText,
}

impl RowCells {
    /// Slots in display order.
    pub fn slots(&self) -> [&RichText; 5] {
        [
            &self.marker,
            &self.name,
            &self.kind,
            &self.description,
            &self.trailing,
        ]
    }
}

/// Column widths for the five slots of a `width`-column row.
///
/// The trailing slot takes whatever the fixed and proportional slots
/// leave over.
pub fn slot_widths(width: u16) -> [usize; 5] {
    let width = width as usize;
    let name = width * NAME_PERCENT / 100;
    let kind = width * KIND_PERCENT / 100;
    let description = width * DESCRIPTION_PERCENT / 100;
    let used = MARKER_WIDTH + name + kind + description + 4 * GAP;
    [
        MARKER_WIDTH,
        name,
        kind,
        description,
        width.saturating_sub(used),
    ]
}

/// Builds the styled slot contents for a descriptor.
pub fn row_cells(descriptor: &ArgumentDescriptor) -> RowCells {
    let required_style = Style::default().fg(palette::RED);

    let marker = if descriptor.is_required() {
        RichText::new().styled(REQUIRED_MARKER, required_style)
    } else {
        RichText::new()
    };

    let name_style = if descriptor.is_emphasized() {
        Style::default().fg(palette::FROST)
    } else {
        neutral()
    };
    let name = RichText::new().styled(descriptor.name(), name_style);

    let kind = RichText::new().styled(
        descriptor.kind_value().label(),
        Style::default().fg(palette::YELLOW),
    );

    let mut trailing = RichText::new();
    if let Some(default) = descriptor.default() {
        trailing = trailing.append(
            default
                .enclosed("[default: ", "]")
                .with_base_style(Style::default().add_modifier(Modifier::BOLD)),
        );
    }
    if descriptor.is_required() {
        if !trailing.is_empty() {
            trailing = trailing.text(" ");
        }
        trailing = trailing.styled(REQUIRED_ANNOTATION, required_style);
    }

    RowCells {
        marker,
        name,
        kind,
        description: descriptor.description_text().clone(),
        trailing,
    }
}

/// Renders a descriptor as one or more lines, choosing the layout from `width`.
pub fn render_row(descriptor: &ArgumentDescriptor, width: u16) -> Vec<Line<'static>> {
    render_row_with(descriptor, width, RowLayout::for_width(width, false))
}

/// Renders a descriptor with an explicit layout.
pub fn render_row_with(
    descriptor: &ArgumentDescriptor,
    width: u16,
    layout: RowLayout,
) -> Vec<Line<'static>> {
    let cells = row_cells(descriptor);
    match layout {
        RowLayout::Columns => render_columns(&cells, width),
        RowLayout::Stacked => render_stacked(&cells, width),
    }
}

fn render_columns(cells: &RowCells, width: u16) -> Vec<Line<'static>> {
    let widths = slot_widths(width);
    let wrapped: Vec<Vec<Line<'static>>> = cells
        .slots()
        .iter()
        .zip(widths)
        .map(|(cell, w)| if w == 0 { Vec::new() } else { wrap_rich(cell, w) })
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);

    let last = widths.len() - 1;
    (0..height)
        .map(|row| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            for (slot, lines) in wrapped.iter().enumerate() {
                let line = lines.get(row).cloned().unwrap_or_default();
                if slot == last {
                    spans.extend(line.spans);
                } else {
                    spans.extend(pad_line(line, widths[slot]).spans);
                    spans.push(Span::raw(" ".repeat(GAP)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn render_stacked(cells: &RowCells, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();

    // The marker sits in front of the name's first line.
    let name_width = width.saturating_sub(MARKER_WIDTH).max(1);
    for (i, line) in wrap_rich(&cells.name, name_width).into_iter().enumerate() {
        let lead = if i == 0 {
            wrap_rich(&cells.marker, MARKER_WIDTH).into_iter().next().unwrap_or_default()
        } else {
            Line::default()
        };
        let mut head = pad_line(lead, MARKER_WIDTH);
        head.spans.extend(line.spans);
        lines.push(head);
    }

    let inner = width.saturating_sub(STACK_INDENT).max(1);
    for cell in [&cells.kind, &cells.description, &cells.trailing] {
        for line in wrap_rich(cell, inner) {
            let mut spans = vec![Span::raw(" ".repeat(STACK_INDENT))];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }
    lines
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod tests;
