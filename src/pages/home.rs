//! The landing page.

use crate::descriptor::{ArgumentDescriptor, Kind};
use crate::error::ContentError;
use crate::prompt::{CommandLineEntry, PromptTag};
use crate::rich::RichText;
use crate::transcript::{ResponseItem, Transcript};

use super::SITE_TITLE;

pub fn transcript() -> Result<Transcript, ContentError> {
    let commands = vec![
        ArgumentDescriptor::new("about-me")?
            .kind(Kind::Text)
            .description("Who I am, what I do and where to find me."),
        ArgumentDescriptor::new("project")?
            .kind(Kind::List)
            .description("Things I have built."),
    ];

    Ok(Transcript::new()
        .command(CommandLineEntry::typed("whoami"))
        .response(vec![
            ResponseItem::Heading(SITE_TITLE.into()),
            ResponseItem::paragraph(
                RichText::new()
                    .highlight("Software Developer")
                    .text(" from ")
                    .highlight("Brisbane, Australia")
                    .text("."),
            ),
        ])
        .command(CommandLineEntry::typed("help").with_tag(PromptTag::Inline))
        .response(vec![
            ResponseItem::paragraph(
                RichText::new()
                    .highlight("Usage:")
                    .text(" COMMAND [OPTIONS]"),
            ),
            ResponseItem::section("Commands", vec![ResponseItem::Arguments(commands)]),
            ResponseItem::paragraph("Press Tab to switch pages, q to quit."),
        ])
        .command(CommandLineEntry::idle()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DocumentLine, LayoutOptions, flatten};

    #[test]
    fn test_home_builds_with_idle_prompt() {
        let transcript = transcript().unwrap();
        assert_eq!(transcript.blinking_lines(), 1);
        assert_eq!(transcript.descriptors().len(), 2);
    }

    #[test]
    fn test_home_help_follows_whoami_directly() {
        let doc = flatten(&transcript().unwrap(), 80, LayoutOptions::default());
        let help_at = doc
            .lines
            .iter()
            .position(|l| matches!(l, DocumentLine::Text(line) if line.to_string() == "❯ help"))
            .unwrap();
        assert!(matches!(doc.lines[help_at - 1], DocumentLine::Text(_)));
    }
}
