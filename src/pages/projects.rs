//! The Projects page: a directory listing and one fieldset per project.

use crate::error::ContentError;
use crate::prompt::CommandLineEntry;
use crate::rich::{Link, RichText};
use crate::transcript::{ListItem, ResponseItem, Transcript};

use super::BOTTOM_PADDING;

/// A project card: title, blurb, screenshots and feature lists.
struct Project {
    slug: &'static str,
    legend: &'static str,
    title: &'static str,
    repo: &'static str,
    summary: RichText,
    images: &'static [(&'static str, &'static str)],
    current: Vec<ListItem>,
    planned: Vec<ListItem>,
}

impl Project {
    fn command(&self) -> CommandLineEntry {
        CommandLineEntry::typed(
            RichText::new()
                .text("project --link ")
                .link(Link::new(self.repo, self.repo.to_lowercase())),
        )
    }

    fn card(&self) -> ResponseItem {
        let images = self
            .images
            .iter()
            .map(|(url, alt)| RichText::new().text("[image] ").link(Link::new(*url, *alt)))
            .collect();
        ResponseItem::section(
            self.legend,
            vec![
                ResponseItem::Heading(self.title.into()),
                ResponseItem::Rule,
                ResponseItem::Paragraph(self.summary.clone()),
                ResponseItem::Links(images),
                ResponseItem::section("Current Features", vec![ResponseItem::List(self.current.clone())]),
                ResponseItem::section("Planned Features", vec![ResponseItem::List(self.planned.clone())]),
            ],
        )
    }
}

fn items(top: &[&str]) -> Vec<ListItem> {
    top.iter().map(|s| ListItem::new(*s)).collect()
}

fn nested(items: &[&str]) -> Vec<ListItem> {
    items.iter().map(|s| ListItem::nested(*s)).collect()
}

fn sr2_interactive_map() -> Project {
    let mut current = items(&["See locations for:"]);
    current.extend(nested(&[
        "Gordo slimes",
        "Bee drones (and the associated logs)",
        "Map nodes",
        "7-Zee treasure pods",
        "Locked doors",
    ]));
    current.extend(items(&[
        "Place custom icons.",
        "Save custom icons to your browser cache.",
    ]));

    let mut planned = items(&["Locations for:"]);
    planned.extend(nested(&["Resource locations", "Slime type locations"]));

    Project {
        slug: "sr2-interactive-map",
        legend: "SR2 Interactive Map",
        title: "Slime Rancher 2 Interactive Map",
        repo: "https://github.com/BrookJeynes/slime-rancher-2-interactive-map",
        summary: RichText::new()
            .text(
                "An interactive map where you can place custom icons and see the locations for a \
                 multitude of Slime Rancher 2 resources and points of interest. A live version of \
                 the website can be found ",
            )
            .link(Link::new(
                "https://brookjeynes.github.io/slime-rancher-2-interactive-map/",
                "here",
            ))
            .text("."),
        images: &[(
            "https://github.com/BrookJeynes/slime-rancher-2-interactive-map/blob/main/assets/readme/map-example.png?raw=true",
            "map example",
        )],
        current,
        planned,
    }
}

fn pixel_art_maker() -> Project {
    let mut planned = items(&[
        "Export other image formats",
        "PNG transparency option",
        "Save custom colours",
        "More tools:",
    ]);
    planned.extend(nested(&["Fill tool (bucket)", "Clear canvas"]));

    Project {
        slug: "pixel-art-maker",
        legend: "Pixel Art Maker",
        title: "Pixel Art Maker",
        repo: "https://github.com/BrookJeynes/pixel-art-maker",
        summary: RichText::from(
            "Pixel Art Maker is a small website where you can create simple pixel art. This \
             website is just a small project I decided to make to teach myself Typescript and \
             better my ReactJS skills.",
        ),
        images: &[
            (
                "https://github.com/BrookJeynes/pixel-art-maker/blob/main/src/assets/readme/blank-canvas-example.png?raw=true",
                "Blank canvas example",
            ),
            (
                "https://github.com/BrookJeynes/pixel-art-maker/blob/main/src/assets/readme/snail-example.png?raw=true",
                "Snail example",
            ),
        ],
        current: items(&[
            "Resize canvas & scale",
            "Custom and pre-defined colours",
            "Erase colours painted on the canvas",
            "export images as a 'PNG' (not transparent)",
        ]),
        planned,
    }
}

pub fn transcript() -> Result<Transcript, ContentError> {
    let projects = [sr2_interactive_map(), pixel_art_maker()];

    let listing = projects
        .iter()
        .map(|p| RichText::from(Link::new(p.repo, p.slug)))
        .collect();

    let mut transcript = Transcript::new()
        .command(CommandLineEntry::typed("ls projects/"))
        .response(vec![ResponseItem::Links(listing)]);
    for project in &projects {
        transcript = transcript
            .command(project.command())
            .response(vec![project.card()]);
    }
    Ok(transcript
        .command(CommandLineEntry::idle())
        .response(vec![ResponseItem::Spacer(BOTTOM_PADDING)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_commands_in_order() {
        let transcript = transcript().unwrap();
        let commands: Vec<String> = transcript.commands().map(|c| c.command_text()).collect();
        assert_eq!(
            commands,
            vec![
                "ls projects/".to_string(),
                "project --link https://github.com/brookjeynes/slime-rancher-2-interactive-map"
                    .to_string(),
                "project --link https://github.com/brookjeynes/pixel-art-maker".to_string(),
                String::new(),
            ]
        );
        assert_eq!(transcript.blinking_lines(), 1);
    }

    #[test]
    fn test_projects_link_targets_keep_case() {
        let command = sr2_interactive_map().command();
        let targets: Vec<&str> = command.command.as_ref().unwrap().links().collect();
        assert_eq!(
            targets,
            vec!["https://github.com/BrookJeynes/slime-rancher-2-interactive-map"]
        );
    }
}
