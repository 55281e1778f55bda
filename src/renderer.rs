//! Renderer: converts DocumentLine sequences to Ratatui Frame output.
//!
//! This is the final stage of the rendering pipeline. It reads from
//! `&App` to determine which lines are visible, then draws them to the
//! frame between the navigation header and the status bar. Blinking
//! prompts get their cursor here, per frame, from the blink timer.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::layout::DocumentLine;
use crate::pages::SITE_TITLE;
use crate::prompt::{CursorPhase, append_cursor};
use crate::rich::{chrome, palette};
use crate::router::Route;

/// Rows taken by the header and status bar.
pub const CHROME_ROWS: u16 = 2;

/// Draws the header, the visible transcript lines and the status bar.
///
/// For terminals shorter than three rows only the status bar is drawn.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    if area.height > CHROME_ROWS {
        draw_header(frame, app.route, Rect { height: 1, ..area });

        let content_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height - CHROME_ROWS,
        };
        draw_content(frame, app, content_area, now);
    }

    draw_status_bar(frame, app, area);
}

fn draw_content(frame: &mut Frame, app: &App, content_area: Rect, now: Instant) {
    let content_height = content_area.height as usize;
    for (i, line_idx) in app.visible_range().enumerate() {
        if i >= content_height {
            break;
        }
        let Some(doc_line) = app.document.lines.get(line_idx) else {
            break;
        };

        // saturating_add prevents u16 overflow if area.y is non-zero and i is large.
        let y = content_area.y.saturating_add(i as u16);
        let line_area = Rect {
            y,
            height: 1,
            ..content_area
        };

        match doc_line {
            DocumentLine::Text(line) => {
                frame.render_widget(Paragraph::new(line.clone()), line_area);
            }
            DocumentLine::Prompt { line, blink } => {
                // No timer means a steady cursor.
                let phase = app
                    .cursor_phase(*blink, now)
                    .unwrap_or(CursorPhase::Visible);
                frame.render_widget(Paragraph::new(append_cursor(line.clone(), phase)), line_area);
            }
            DocumentLine::Empty => {
                // Nothing to render, blank line.
            }
            DocumentLine::Rule => {
                let rule = "─".repeat(content_area.width as usize);
                frame.render_widget(Paragraph::new(Line::from(Span::styled(rule, chrome()))), line_area);
            }
        }
    }
}

/// Renders the site title and route links on the top row.
fn draw_header(frame: &mut Frame, active: Route, area: Rect) {
    let mut spans = vec![
        Span::styled(SITE_TITLE, Style::default().fg(palette::SNOW).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
    ];
    for (i, route) in Route::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" / ", chrome()));
        }
        let style = if route == active {
            Style::default().fg(palette::FROST).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette::SNOW)
        };
        spans.push(Span::styled(route.title(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the status bar at the bottom row of the given area.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_y = area.y + area.height.saturating_sub(1);
    let status_area = Rect {
        x: area.x,
        y: status_y,
        width: area.width,
        height: 1,
    };

    let percent = app.scroll_percent();
    let total_lines = app.document.total_height;
    let current_line = if total_lines == 0 {
        0
    } else {
        app.scroll_offset + 1
    };

    let status_text = format!(
        " {} | {}% | {}/{} ",
        app.route, percent, current_line, total_lines
    );

    let status_style = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    // Pad the status text to fill the entire width.
    let padded = format!("{:<width$}", status_text, width = area.width as usize);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(padded, status_style))), status_area);
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
