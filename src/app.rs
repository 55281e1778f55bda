//! Application state: mounted page, scroll position, cursor timers, quit flag.
//!
//! `App` is a pure state container. It never imports `ratatui::Frame` or
//! performs any rendering. The renderer reads from `&App` to determine
//! what to draw. Time is always passed in, never read here, so every
//! state transition is reproducible in tests.

use std::ops::Range;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::ContentError;
use crate::layout::{self, LayoutOptions, PreRenderedDocument};
use crate::prompt::{CursorBlink, CursorPhase};
use crate::router::Route;
use crate::transcript::Transcript;

/// Display settings resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    /// Blink interval; `None` shows a steady cursor and starts no timers.
    pub blink_interval: Option<Duration>,
    /// Stack argument rows regardless of width.
    pub force_narrow: bool,
}

/// Application state for the transcript viewer.
pub struct App {
    /// The currently mounted route.
    pub route: Route,
    /// The route's transcript, kept for re-layout on resize.
    pub transcript: Transcript,
    /// The laid-out transcript.
    pub document: PreRenderedDocument,
    /// Current vertical scroll offset (0 = top of document).
    pub scroll_offset: usize,
    /// Number of visible lines in the content area (excludes header and status bar).
    pub viewport_height: usize,
    /// Width the document was laid out for.
    pub width: u16,
    /// One timer per blinking prompt of the mounted page.
    blinks: Vec<CursorBlink>,
    settings: ViewSettings,
    /// When true, the event loop should exit.
    pub quit: bool,
}

impl App {
    /// Mounts `route` at `width` columns.
    ///
    /// Viewport height is set to 0 and must be updated by `main.rs`
    /// before each draw call.
    pub fn new(
        route: Route,
        width: u16,
        settings: ViewSettings,
        now: Instant,
    ) -> Result<Self, ContentError> {
        let transcript = route.transcript()?;
        let document = layout::flatten(&transcript, width, layout_options(settings));
        let mut app = Self {
            route,
            transcript,
            document,
            scroll_offset: 0,
            viewport_height: 0,
            width,
            blinks: Vec::new(),
            settings,
            quit: false,
        };
        app.start_blinks(now);
        app.report_coverage();
        tracing::info!(route = %route, width, "mounted page");
        Ok(app)
    }

    /// Tears down the current page and mounts `route`.
    pub fn navigate(&mut self, route: Route, now: Instant) -> Result<(), ContentError> {
        if route == self.route {
            return Ok(());
        }
        let transcript = route.transcript()?;
        self.unmount();
        self.route = route;
        self.transcript = transcript;
        self.document = layout::flatten(&self.transcript, self.width, layout_options(self.settings));
        self.scroll_offset = 0;
        self.start_blinks(now);
        self.report_coverage();
        tracing::info!(route = %route, "navigated");
        Ok(())
    }

    /// Stops every cursor timer of the mounted page.
    pub fn unmount(&mut self) {
        for blink in &mut self.blinks {
            blink.stop();
        }
        if !self.blinks.is_empty() {
            tracing::debug!(count = self.blinks.len(), route = %self.route, "stopped cursor timers");
        }
        self.blinks.clear();
    }

    fn start_blinks(&mut self, now: Instant) {
        let Some(interval) = self.settings.blink_interval else {
            return;
        };
        self.blinks = (0..self.document.blinking)
            .map(|_| CursorBlink::start(interval, now))
            .collect();
        if !self.blinks.is_empty() {
            tracing::debug!(count = self.blinks.len(), ?interval, "started cursor timers");
        }
    }

    fn report_coverage(&self) {
        let missing = self.transcript.undocumented_options();
        if !missing.is_empty() {
            tracing::debug!(route = %self.route, ?missing, "options without an example command");
        }
    }

    /// Number of live cursor timers.
    pub fn running_blinks(&self) -> usize {
        self.blinks.iter().filter(|b| b.is_running()).count()
    }

    /// Phase of prompt `index`'s cursor, or `None` when no timer drives it.
    pub fn cursor_phase(&self, index: usize, now: Instant) -> Option<CursorPhase> {
        self.blinks.get(index).map(|b| b.phase(now))
    }

    /// How long the event loop may wait before the next redraw is due.
    ///
    /// `None` means nothing is animating and the loop may block.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.blinks
            .iter()
            .filter_map(|b| b.until_next_toggle(now))
            .min()
    }

    /// Re-lays out the transcript for a new terminal width.
    pub fn resize(&mut self, width: u16) {
        if width == self.width {
            return;
        }
        self.width = width;
        self.document = layout::flatten(&self.transcript, width, layout_options(self.settings));
        // Clamp scroll offset to the new max.
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        tracing::debug!(width, lines = self.document.total_height, "relaid out");
    }

    /// Dispatches a key event to a scroll, navigation or quit action.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<(), ContentError> {
        match key.code {
            // Scroll down 1 line
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            // Scroll up 1 line
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            // Scroll down half-page
            KeyCode::Char('d') | KeyCode::PageDown => {
                let half = self.viewport_height / 2;
                self.scroll_down(half.max(1));
            }
            // Scroll up half-page
            KeyCode::Char('u') | KeyCode::PageUp => {
                let half = self.viewport_height / 2;
                self.scroll_up(half.max(1));
            }
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to_bottom(),
            KeyCode::Tab => self.navigate(self.route.next(), now)?,
            KeyCode::BackTab => self.navigate(self.route.previous(), now)?,
            KeyCode::Char('1') => self.navigate(Route::Home, now)?,
            KeyCode::Char('2') => self.navigate(Route::About, now)?,
            KeyCode::Char('3') => self.navigate(Route::Projects, now)?,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            // Ctrl+C also quits
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            _ => {}
        }
        Ok(())
    }

    /// Returns the range of line indices visible in the current viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll_offset + self.viewport_height).min(self.document.total_height);
        self.scroll_offset..end
    }

    /// Scrolls down by `n` lines, clamped to the maximum scroll position.
    pub fn scroll_down(&mut self, n: usize) {
        let max = self.max_scroll();
        self.scroll_offset = self.scroll_offset.saturating_add(n).min(max);
    }

    /// Scrolls up by `n` lines, clamped to 0.
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Returns the maximum valid scroll offset.
    ///
    /// When the document is shorter than the viewport, returns 0 (no scrolling).
    pub fn max_scroll(&self) -> usize {
        self.document
            .total_height
            .saturating_sub(self.viewport_height)
    }

    /// Returns the current scroll position as a percentage (0–100).
    ///
    /// Returns 100 when the document fits within the viewport or when
    /// scrolled to the bottom.
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_scroll();
        if max == 0 {
            return 100;
        }
        ((self.scroll_offset as f64 / max as f64) * 100.0) as u16
    }
}

fn layout_options(settings: ViewSettings) -> LayoutOptions {
    LayoutOptions {
        force_narrow: settings.force_narrow,
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
