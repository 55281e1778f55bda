//! Rich text: styled spans that may carry a link target.
//!
//! This is the leaf of the content model. Page content builds `RichText`
//! values; the layout engine wraps them and converts them to ratatui
//! `Span`s. Links are ordinary spans with a `link` target attached, so the
//! rest of the pipeline treats them as opaque renderable text.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Nord palette colours used across the transcript.
pub mod palette {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(0xBF, 0x61, 0x6A);
    pub const GREEN: Color = Color::Rgb(0xA3, 0xBE, 0x8C);
    pub const YELLOW: Color = Color::Rgb(0xEB, 0xCB, 0x8B);
    pub const FROST: Color = Color::Rgb(0x88, 0xC0, 0xD0);
    pub const SNOW: Color = Color::Rgb(0xEC, 0xEF, 0xF4);
    pub const POLAR: Color = Color::Rgb(0x4C, 0x56, 0x6A);
}

/// A contiguous run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// The text content of this span.
    pub text: String,
    /// The ratatui style to apply when rendering.
    pub style: Style,
    /// Target URL when this span is a hyperlink.
    pub link: Option<String>,
}

impl StyledSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::default())
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    /// Converts to an owned ratatui span.
    pub fn to_span(&self) -> Span<'static> {
        Span::styled(self.text.clone(), self.style)
    }
}

/// A hyperlink: target URL plus visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub target: String,
    pub text: String,
}

impl Link {
    pub fn new(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
        }
    }

    /// Style shared by every rendered link.
    pub fn style() -> Style {
        Style::default()
            .fg(palette::FROST)
            .add_modifier(Modifier::UNDERLINED)
    }
}

impl From<Link> for StyledSpan {
    fn from(link: Link) -> Self {
        Self {
            text: link.text,
            style: Link::style(),
            link: Some(link.target),
        }
    }
}

/// An ordered sequence of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    spans: Vec<StyledSpan>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unstyled text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(StyledSpan::plain(text));
        self
    }

    /// Appends text highlighted in yellow, the transcript's emphasis colour.
    pub fn highlight(self, text: impl Into<String>) -> Self {
        self.styled(text, Style::default().fg(palette::YELLOW))
    }

    pub fn bold(self, text: impl Into<String>) -> Self {
        self.styled(text, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn styled(mut self, text: impl Into<String>, style: Style) -> Self {
        self.spans.push(StyledSpan::styled(text, style));
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.spans.push(link.into());
        self
    }

    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// True when there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// Concatenated text without styles.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Link targets in order of appearance.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.spans.iter().filter_map(|s| s.link.as_deref())
    }

    /// Returns a copy with `style` patched onto every span.
    ///
    /// Span-level styles win over the patch, so links keep their colour
    /// inside a bold annotation.
    pub fn with_base_style(&self, style: Style) -> Self {
        Self {
            spans: self
                .spans
                .iter()
                .map(|s| StyledSpan {
                    text: s.text.clone(),
                    style: style.patch(s.style),
                    link: s.link.clone(),
                })
                .collect(),
        }
    }

    /// Wraps this text between two plain fragments, e.g. `[default: ` and `]`.
    pub fn enclosed(&self, open: &str, close: &str) -> Self {
        let mut spans = Vec::with_capacity(self.spans.len() + 2);
        spans.push(StyledSpan::plain(open));
        spans.extend(self.spans.iter().cloned());
        spans.push(StyledSpan::plain(close));
        Self { spans }
    }

    /// Appends all spans of `other`.
    pub fn append(mut self, other: RichText) -> Self {
        self.spans.extend(other.spans);
        self
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::new().text(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        RichText::new().text(text)
    }
}

impl From<Link> for RichText {
    fn from(link: Link) -> Self {
        RichText::new().link(link)
    }
}

/// Neutral foreground used where no accent applies.
pub fn neutral() -> Style {
    Style::default().fg(palette::SNOW)
}

/// Dimmed style for borders and chrome.
pub fn chrome() -> Style {
    Style::default().fg(palette::POLAR)
}
