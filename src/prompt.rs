//! Command line renderer: the simulated prompt, typed command and cursor.
//!
//! `CommandLineEntry` is pure data. The cursor animation lives in
//! `CursorBlink`, one per rendered line, owned by whoever mounts the line
//! (the `App`). Its phase is a pure function of elapsed time, so a
//! transcript can be replayed at any instant and yield the same frame.

use std::time::{Duration, Instant};

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::rich::{RichText, palette};
use crate::wrap::wrap_rich;

/// Glyph printed before every command.
pub const PROMPT_GLYPH: &str = "❯";

/// Cursor glyph appended to idle prompts.
pub const CURSOR_GLYPH: &str = "|";

/// Time between cursor toggles unless configured otherwise.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Structural container a command line is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptTag {
    /// Stands apart from the preceding unit with a blank line.
    #[default]
    Block,
    /// Laid out directly under the preceding unit.
    Inline,
}

/// One simulated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineEntry {
    pub tag: PromptTag,
    pub command: Option<RichText>,
    pub show_cursor: bool,
}

impl CommandLineEntry {
    /// A block-level line showing `command`, without a cursor.
    pub fn typed(command: impl Into<RichText>) -> Self {
        Self {
            tag: PromptTag::Block,
            command: Some(command.into()),
            show_cursor: false,
        }
    }

    /// The empty blinking prompt that ends a page.
    pub fn idle() -> Self {
        Self {
            tag: PromptTag::Block,
            command: None,
            show_cursor: true,
        }
    }

    pub fn with_tag(mut self, tag: PromptTag) -> Self {
        self.tag = tag;
        self
    }

    /// Plain text of the typed command, empty when absent.
    pub fn command_text(&self) -> String {
        self.command
            .as_ref()
            .map(RichText::plain_text)
            .unwrap_or_default()
    }
}

/// Visibility of a blinking cursor at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPhase {
    Visible,
    Hidden,
}

/// A per-line blink timer.
///
/// Starts visible and toggles every `interval` until stopped. It holds no
/// thread or global ticker: the event loop asks `until_next_toggle` how
/// long it may sleep.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    interval: Duration,
    started_at: Instant,
    running: bool,
}

impl CursorBlink {
    /// Starts a timer at `now`. A zero interval is clamped to 1 ms.
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            started_at: now,
            running: true,
        }
    }

    /// Stops the timer. A stopped cursor reads as hidden.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Phase at `now`. Instants before the start read as visible.
    pub fn phase(&self, now: Instant) -> CursorPhase {
        if !self.running {
            return CursorPhase::Hidden;
        }
        if self.toggles_at(now) % 2 == 0 {
            CursorPhase::Visible
        } else {
            CursorPhase::Hidden
        }
    }

    /// Time left until the next toggle, or `None` when stopped.
    pub fn until_next_toggle(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let interval = self.interval.as_nanos();
        let elapsed = now.saturating_duration_since(self.started_at).as_nanos();
        let into_phase = elapsed % interval;
        let remaining = u64::try_from(interval - into_phase).unwrap_or(u64::MAX);
        Some(Duration::from_nanos(remaining))
    }

    fn toggles_at(&self, now: Instant) -> u128 {
        now.saturating_duration_since(self.started_at).as_nanos() / self.interval.as_nanos()
    }
}

/// Lays out a command line at `width` columns.
///
/// The command wraps with continuation lines hanging under its first
/// character. When the entry shows a cursor, the last line keeps one
/// column free for it; the cursor itself is added per frame by
/// [`append_cursor`]. Always returns at least the prompt line.
pub fn command_lines(entry: &CommandLineEntry, width: usize) -> Vec<Line<'static>> {
    let indent = PROMPT_GLYPH.width() + 1;
    let reserve = usize::from(entry.show_cursor);
    let inner = width.saturating_sub(indent + reserve).max(1);

    let wrapped = entry
        .command
        .as_ref()
        .map(|command| wrap_rich(command, inner))
        .unwrap_or_default();
    if wrapped.is_empty() {
        return vec![Line::from(prompt_spans())];
    }

    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let mut spans = if i == 0 {
                prompt_spans()
            } else {
                vec![Span::raw(" ".repeat(indent))]
            };
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Appends the cursor for `phase`. A hidden cursor keeps its column as a blank.
pub fn append_cursor(mut line: Line<'static>, phase: CursorPhase) -> Line<'static> {
    let glyph = match phase {
        CursorPhase::Visible => CURSOR_GLYPH,
        CursorPhase::Hidden => " ",
    };
    line.spans.push(Span::raw(glyph));
    line
}

fn prompt_spans() -> Vec<Span<'static>> {
    vec![
        Span::styled(PROMPT_GLYPH, Style::default().fg(palette::GREEN)),
        Span::raw(" "),
    ]
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
