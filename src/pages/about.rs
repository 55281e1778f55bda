//! The About page: `about-me --help` followed by one run per option.

use crate::descriptor::{ArgumentDescriptor, Kind};
use crate::error::ContentError;
use crate::prompt::CommandLineEntry;
use crate::rich::{Link, RichText};
use crate::transcript::{ListItem, ResponseItem, Transcript};

use super::BOTTOM_PADDING;

const LINKEDIN: &str = "https://www.linkedin.com/in/brook-jeynes/";
const GITHUB: &str = "https://github.com/BrookJeynes";
const EMAIL: &str = "mailto:jeynesbrook@pm.me";
const SSW: &str = "https://www.ssw.com.au/people/brook-jeynes";

fn arguments() -> Result<Vec<ArgumentDescriptor>, ContentError> {
    Ok(vec![
        ArgumentDescriptor::new("name")?
            .kind(Kind::Text)
            .description("The persons name.")
            .default_value("Brook Jeynes")
            .required(true)
            .emphasize(false),
    ])
}

fn options() -> Result<Vec<ArgumentDescriptor>, ContentError> {
    Ok(vec![
        ArgumentDescriptor::new("--summary")?
            .kind(Kind::Object)
            .description("A short summary of the person.")
            .default_value(r#"{ name: "Brook Jeynes", age: 19, location: "Brisbane, Australia" }"#),
        ArgumentDescriptor::new("--current-job")?
            .kind(Kind::Text)
            .description("The users current job.")
            .default_value(Link::new(SSW, "SSW - Software Developer")),
        ArgumentDescriptor::new("--education")?
            .kind(Kind::Text)
            .description("The users education.")
            .default_value("Queensland University of Technology - Currently Studying"),
        ArgumentDescriptor::new("--skills")?
            .kind(Kind::List)
            .description("The users skills.")
            .default_value("[ JS, React, Python, C, C#, .NET ]"),
        ArgumentDescriptor::new("--interests")?
            .kind(Kind::List)
            .description("The users interests.")
            .default_value("[ programming, micro-controllers, gaming, music ]"),
        ArgumentDescriptor::new("--links")?
            .kind(Kind::List)
            .description("The users social links.")
            .default_value(
                RichText::new()
                    .text("[ ")
                    .link(Link::new(LINKEDIN, "LinkedIn"))
                    .text(", ")
                    .link(Link::new(GITHUB, "Github"))
                    .text(", ")
                    .link(Link::new(EMAIL, "Email"))
                    .text(" ]"),
            ),
        ArgumentDescriptor::new("--help")?
            .kind(Kind::None)
            .description("Show this message and exit"),
    ])
}

fn run(option: &str) -> CommandLineEntry {
    CommandLineEntry::typed(format!(r#"about-me {option} "Brook Jeynes""#))
}

fn bullets(items: &[&str]) -> ResponseItem {
    ResponseItem::List(items.iter().map(|s| ListItem::new(*s)).collect())
}

pub fn transcript() -> Result<Transcript, ContentError> {
    let help = vec![
        ResponseItem::paragraph(
            RichText::new()
                .highlight("Usage:")
                .text(" about-me [OPTIONS] NAME"),
        ),
        ResponseItem::section("Arguments", vec![ResponseItem::Arguments(arguments()?)]),
        ResponseItem::section("Options", vec![ResponseItem::Arguments(options()?)]),
    ];

    let summary = vec![
        ResponseItem::paragraph(RichText::new().bold("Hey, I'm Brook!")),
        ResponseItem::paragraph(
            RichText::new()
                .text("I'm a ")
                .highlight("19")
                .text(" year old ")
                .highlight("Software Developer")
                .text(" from ")
                .highlight("Brisbane, Australia")
                .text(".\nI'm currently in my second year of studying ")
                .highlight("Computer Science")
                .text(" at ")
                .highlight("Queensland University of Technology (QUT)")
                .text(".\nWhile studying I'm also working as a ")
                .highlight("Software Developer")
                .text(" at ")
                .link(Link::new(SSW, "SSW"))
                .text(" creating lots of cool products for companies using technologies such as ")
                .highlight("React")
                .text(", ")
                .highlight("ASP.NET")
                .text(", ")
                .highlight("C#")
                .text(", and many more."),
        ),
        ResponseItem::paragraph("In my spare time I like to do a variety of things such as:"),
        bullets(&[
            "Programming (obviously)",
            "Working on many personal projects such as this website",
            "Playing Tabletop and Video Games with friends",
            "Writing, singing and playing music on guitar and piano",
            "Learning about Micro-controllers and Electronics",
        ]),
        ResponseItem::paragraph("I hope you enjoyed learning a bit more about me!"),
    ];

    let current_job = vec![ResponseItem::paragraph(
        RichText::new()
            .text("I'm working as a ")
            .highlight("Software Developer")
            .text(" at ")
            .link(Link::new(SSW, "SSW")),
    )];

    let education = vec![ResponseItem::paragraph(
        RichText::new()
            .text("I'm currently in my second year of studying ")
            .highlight("Information Technology")
            .text(" at ")
            .highlight("Queensland University of Technology (QUT)")
            .text(".\nI'm majoring in ")
            .highlight("Computer Science")
            .text(" while minoring in ")
            .highlight("IoT and Mobile Technologies")
            .text(" and ")
            .highlight("Data-Centric Computing Extension")
            .text("."),
    )];

    let skills = vec![
        ResponseItem::paragraph(
            "I've had exposure to a variety of programming languages and technologies such as:",
        ),
        bullets(&[
            "C# (ASP.NET, Entity Framework)",
            "JavaScript/Typescript (React, Node.js, Express, Bootstrap, HTML, CSS)",
            "Python (Flask, Tkinter)",
            "Java",
            "C",
            "Git",
            "Azure",
            "Linux, Windows and MacOS",
        ]),
    ];

    let interests = vec![bullets(&[
        "programming",
        "micro-controllers",
        "gaming",
        "music",
    ])];

    let links = vec![
        ResponseItem::paragraph("You can find me on a variety of platforms such as:"),
        ResponseItem::List(vec![
            ListItem::new(
                RichText::new()
                    .text("linkedin - ")
                    .link(Link::new(LINKEDIN, "linkedin/brook-jeynes")),
            ),
            ListItem::new(
                RichText::new()
                    .text("github - ")
                    .link(Link::new(GITHUB, "github/brookjeynes")),
            ),
            ListItem::new(
                RichText::new()
                    .text("email - ")
                    .link(Link::new(EMAIL, "jeynesbrook@pm.me")),
            ),
        ]),
    ];

    Ok(Transcript::new()
        .command(CommandLineEntry::typed("about-me --help"))
        .response(help)
        .command(run("--summary"))
        .response(summary)
        .command(run("--current-job"))
        .response(current_job)
        .command(run("--education"))
        .response(education)
        .command(run("--skills"))
        .response(skills)
        .command(run("--interests"))
        .response(interests)
        .command(run("--links"))
        .response(links)
        .command(CommandLineEntry::idle())
        .response(vec![ResponseItem::Spacer(BOTTOM_PADDING)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Unit;

    #[test]
    fn test_about_every_option_has_an_example() {
        let transcript = transcript().unwrap();
        assert!(transcript.undocumented_options().is_empty());
    }

    #[test]
    fn test_about_positional_is_required_with_default() {
        let args = arguments().unwrap();
        let name = &args[0];
        assert!(name.is_required());
        assert!(name.default().is_some());
        assert!(!name.is_emphasized());
    }

    #[test]
    fn test_about_ends_with_single_idle_prompt() {
        let transcript = transcript().unwrap();
        assert_eq!(transcript.blinking_lines(), 1);
        let last = transcript.commands().last().unwrap();
        assert!(last.show_cursor);
        assert!(last.command.is_none());
        match transcript.units().last() {
            Some(Unit::Response(block)) => {
                assert_eq!(block.items, vec![ResponseItem::Spacer(BOTTOM_PADDING)]);
            }
            other => panic!("expected bottom padding, got {other:?}"),
        }
    }

    #[test]
    fn test_about_options_are_dashed() {
        for option in options().unwrap() {
            assert!(option.is_option(), "{} is not an option", option.name());
        }
    }
}
