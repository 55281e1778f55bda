//! Transcripts: the ordered command lines and responses of one page.
//!
//! Page content builds a `Transcript` once per mount. The layout engine
//! walks it in order; nothing here renders or mutates after construction.

use crate::descriptor::ArgumentDescriptor;
use crate::prompt::CommandLineEntry;
use crate::rich::RichText;

/// One bullet of a list. `depth` 0 is the outermost level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: RichText,
    pub depth: u8,
}

impl ListItem {
    pub fn new(text: impl Into<RichText>) -> Self {
        Self {
            text: text.into(),
            depth: 0,
        }
    }

    pub fn nested(text: impl Into<RichText>) -> Self {
        Self {
            text: text.into(),
            depth: 1,
        }
    }
}

/// A piece of response content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseItem {
    /// Wrapped prose. `\n` forces a line break.
    Paragraph(RichText),
    /// A bold single-line title.
    Heading(RichText),
    /// Bulleted items.
    List(Vec<ListItem>),
    /// Descriptor rows sharing one column layout.
    Arguments(Vec<ArgumentDescriptor>),
    /// A bordered group with a caption.
    Section {
        legend: String,
        items: Vec<ResponseItem>,
    },
    /// Entries laid out side by side, e.g. a directory listing.
    Links(Vec<RichText>),
    /// A horizontal divider.
    Rule,
    /// Blank lines.
    Spacer(u16),
}

impl ResponseItem {
    pub fn paragraph(text: impl Into<RichText>) -> Self {
        ResponseItem::Paragraph(text.into())
    }

    pub fn section(legend: impl Into<String>, items: Vec<ResponseItem>) -> Self {
        ResponseItem::Section {
            legend: legend.into(),
            items,
        }
    }

    /// Appends the descriptors of this item and its nested sections.
    fn collect_descriptors<'a>(&'a self, found: &mut Vec<&'a ArgumentDescriptor>) {
        match self {
            ResponseItem::Arguments(rows) => found.extend(rows.iter()),
            ResponseItem::Section { items, .. } => {
                for item in items {
                    item.collect_descriptors(found);
                }
            }
            _ => {}
        }
    }
}

/// Content shown after a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBlock {
    pub items: Vec<ResponseItem>,
}

impl ResponseBlock {
    pub fn new(items: Vec<ResponseItem>) -> Self {
        Self { items }
    }
}

/// One rendering unit of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Command(CommandLineEntry),
    Response(ResponseBlock),
}

/// An ordered sequence of command lines and responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    units: Vec<Unit>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, entry: CommandLineEntry) -> Self {
        self.units.push(Unit::Command(entry));
        self
    }

    pub fn response(mut self, items: Vec<ResponseItem>) -> Self {
        self.units.push(Unit::Response(ResponseBlock::new(items)));
        self
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Command lines in transcript order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandLineEntry> {
        self.units.iter().filter_map(|unit| match unit {
            Unit::Command(entry) => Some(entry),
            Unit::Response(_) => None,
        })
    }

    /// Number of command lines that want a blinking cursor.
    pub fn blinking_lines(&self) -> usize {
        self.commands().filter(|c| c.show_cursor).count()
    }

    /// Every descriptor in every response, including nested sections.
    pub fn descriptors(&self) -> Vec<&ArgumentDescriptor> {
        let mut found = Vec::new();
        for unit in &self.units {
            let Unit::Response(block) = unit else {
                continue;
            };
            for item in &block.items {
                item.collect_descriptors(&mut found);
            }
        }
        found
    }

    /// Options declared in a descriptor table that no command line uses.
    ///
    /// Advisory only: an option counts as used when its name appears as a
    /// whole word in some command's text.
    pub fn undocumented_options(&self) -> Vec<&str> {
        let commands: Vec<String> = self.commands().map(CommandLineEntry::command_text).collect();
        self.descriptors()
            .into_iter()
            .filter(|d| d.is_option())
            .map(ArgumentDescriptor::name)
            .filter(|name| {
                !commands
                    .iter()
                    .any(|cmd| cmd.split_whitespace().any(|word| word == *name))
            })
            .collect()
    }
}
