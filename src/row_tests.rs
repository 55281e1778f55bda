    use super::*;
    use crate::descriptor::Kind;
    use crate::rich::Link;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn joined(lines: &[Line<'_>]) -> String {
        lines.iter().map(text_of).collect::<Vec<_>>().join("\n")
    }

    fn skills() -> ArgumentDescriptor {
        ArgumentDescriptor::new("--skills")
            .unwrap()
            .kind(Kind::List)
            .description("The users skills.")
            .default_value("[ JS, React, Python ]")
    }

    fn positional_name() -> ArgumentDescriptor {
        ArgumentDescriptor::new("name")
            .unwrap()
            .kind("TEXT")
            .description("The persons name.")
            .required(true)
            .default_value("Brook Jeynes")
            .emphasize(false)
    }

    #[test]
    fn test_row_skills_scenario() {
        let lines = render_row(&skills(), 160);
        assert_eq!(lines.len(), 1);
        let text = text_of(&lines[0]);
        assert!(text.contains("--skills"));
        assert!(text.contains("LIST"));
        assert!(text.contains("The users skills."));
        assert!(text.contains("[default: [ JS, React, Python ]]"));
        assert!(!text.contains(REQUIRED_MARKER));
        assert!(!text.contains(REQUIRED_ANNOTATION));
    }

    #[test]
    fn test_row_required_with_default_scenario() {
        let lines = render_row(&positional_name(), 160);
        let text = joined(&lines);
        assert!(text.starts_with(REQUIRED_MARKER));
        assert!(text.contains("[default: Brook Jeynes]"));
        assert!(text.contains(REQUIRED_ANNOTATION));
        // Default comes before the required annotation.
        let default_at = text.find("[default:").unwrap();
        let required_at = text.find(REQUIRED_ANNOTATION).unwrap();
        assert!(default_at < required_at);
    }

    #[test]
    fn test_row_required_marker_and_annotation_for_all_required() {
        for (name, default) in [("a", None), ("--b", Some("x")), ("c", Some(""))] {
            let mut d = ArgumentDescriptor::new(name).unwrap().required(true);
            if let Some(value) = default {
                d = d.default_value(value);
            }
            let cells = row_cells(&d);
            assert_eq!(cells.marker.plain_text(), REQUIRED_MARKER);
            assert!(cells.trailing.plain_text().ends_with(REQUIRED_ANNOTATION));
        }
    }

    #[test]
    fn test_row_no_default_means_no_annotation() {
        let d = ArgumentDescriptor::new("--help")
            .unwrap()
            .description("Show this message and exit");
        let cells = row_cells(&d);
        assert!(cells.trailing.is_empty());
        assert!(!joined(&render_row(&d, 160)).contains("[default:"));
    }

    #[test]
    fn test_row_column_order_invariant() {
        let descriptors = [
            skills(),
            positional_name(),
            ArgumentDescriptor::new("--x").unwrap().kind("OBJECT").description("desc"),
        ];
        for d in &descriptors {
            let text = text_of(&render_row(d, 160)[0]);
            let name_at = text.find(d.name()).unwrap();
            let kind_at = text[name_at..].find(d.kind_value().label()).unwrap() + name_at;
            let desc = d.description_text().plain_text();
            let desc_at = text.find(&desc).unwrap();
            assert!(name_at < kind_at, "name before kind in {text:?}");
            assert!(kind_at < desc_at, "kind before description in {text:?}");
            if d.is_required() {
                assert!(text.find(REQUIRED_MARKER).unwrap() < name_at);
            }
            if let Some(default) = d.default() {
                let default_at = text.find(&default.plain_text()).unwrap();
                assert!(desc_at < default_at);
            }
        }
    }

    #[test]
    fn test_row_columns_aligned_across_rows() {
        let a = text_of(&render_row(&skills(), 120)[0]);
        let b = text_of(&render_row(&positional_name(), 120)[0]);
        // Kind column starts at the same offset regardless of the marker.
        assert_eq!(a.find("LIST"), b.find("TEXT"));
        assert_eq!(a.find("--skills"), b.find("name"));
    }

    #[test]
    fn test_row_slot_widths_fill_row() {
        let widths = slot_widths(100);
        assert_eq!(widths, [2, 18, 10, 30, 36]);
        assert_eq!(widths.iter().sum::<usize>() + 4, 100);
    }

    #[test]
    fn test_row_name_colour_depends_on_emphasis() {
        let emphasized = row_cells(&skills());
        let plain = row_cells(&positional_name());
        assert_eq!(emphasized.name.spans()[0].style.fg, Some(palette::FROST));
        assert_eq!(plain.name.spans()[0].style.fg, Some(palette::SNOW));
    }

    #[test]
    fn test_row_idempotent() {
        let d = skills();
        assert_eq!(render_row(&d, 100), render_row(&d, 100));
        assert_eq!(row_cells(&d), row_cells(&d));
    }

    #[test]
    fn test_row_narrow_width_stacks() {
        let lines = render_row(&skills(), 40);
        assert!(lines.len() >= 4);
        assert_eq!(text_of(&lines[0]).trim(), "--skills");
        assert_eq!(text_of(&lines[1]).trim(), "LIST");
        assert_eq!(text_of(&lines[2]).trim(), "The users skills.");
        assert!(text_of(&lines[3]).contains("[default:"));
    }

    #[test]
    fn test_row_stacked_omits_empty_slots() {
        let d = ArgumentDescriptor::new("--help")
            .unwrap()
            .description("Show this message and exit");
        let lines = render_row_with(&d, 100, RowLayout::Stacked);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_row_layout_for_width() {
        assert_eq!(RowLayout::for_width(NARROW_WIDTH - 1, false), RowLayout::Stacked);
        assert_eq!(RowLayout::for_width(NARROW_WIDTH, false), RowLayout::Columns);
        assert_eq!(RowLayout::for_width(200, true), RowLayout::Stacked);
    }

    #[test]
    fn test_row_long_description_wraps_within_slot() {
        let d = ArgumentDescriptor::new("--summary")
            .unwrap()
            .kind("OBJECT")
            .description("A short summary of the person that goes on for quite a while.");
        let lines = render_row(&d, 80);
        assert!(lines.len() > 1);
        // Continuation rows leave the name column blank.
        assert!(text_of(&lines[1]).starts_with("   "));
    }

    #[test]
    fn test_row_link_default_keeps_link_style() {
        let d = ArgumentDescriptor::new("--current-job")
            .unwrap()
            .kind("TEXT")
            .default_value(Link::new("https://example.com", "SSW"));
        let cells = row_cells(&d);
        assert_eq!(cells.trailing.plain_text(), "[default: SSW]");
        assert_eq!(cells.trailing.links().count(), 1);
    }

    #[test]
    fn test_row_unknown_kind_literal() {
        let d = ArgumentDescriptor::new("--path").unwrap().kind("PATH");
        assert!(text_of(&render_row(&d, 100)[0]).contains("PATH"));
    }

    #[test]
    fn test_row_stacked_name_wraps_within_width() {
        let d = ArgumentDescriptor::new("--current-job")
            .unwrap()
            .kind("TEXT")
            .required(true);
        let lines = render_row_with(&d, 10, RowLayout::Stacked);
        for line in &lines {
            assert!(line.width() <= 10, "{:?} overflows", text_of(line));
        }
        assert!(text_of(&lines[0]).starts_with(REQUIRED_MARKER));
        let name: String = lines
            .iter()
            .take_while(|l| !text_of(l).trim_start().starts_with("TEXT"))
            .map(|l| text_of(l).trim().trim_start_matches(REQUIRED_MARKER).trim().to_string())
            .collect();
        assert_eq!(name, "--current-job");
    }
