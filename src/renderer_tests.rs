    use super::*;
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::app::ViewSettings;
    use crate::prompt::{CURSOR_GLYPH, PROMPT_GLYPH};

    const SETTINGS: ViewSettings = ViewSettings {
        blink_interval: Some(Duration::from_millis(500)),
        force_narrow: false,
    };

    fn render_rows(app: &App, width: u16, height: u16, now: Instant) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app, now)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    fn idle_row(rows: &[String]) -> Option<&String> {
        rows.iter().rev().find(|r| r.trim_start().starts_with(PROMPT_GLYPH))
    }

    fn scrolled_to_end(route: Route, t0: Instant) -> App {
        let mut app = App::new(route, 100, SETTINGS, t0).unwrap();
        app.viewport_height = 28;
        app.scroll_to_bottom();
        app
    }

    #[test]
    fn test_renderer_header_and_status_bar() {
        let t0 = Instant::now();
        let mut app = App::new(Route::About, 100, SETTINGS, t0).unwrap();
        app.viewport_height = 28;
        let rows = render_rows(&app, 100, 30, t0);
        assert!(rows[0].starts_with(SITE_TITLE));
        assert!(rows[0].contains("Home / About / Projects"));
        assert!(rows[29].contains("/about"));
        assert!(rows[1].contains("about-me --help"));
    }

    #[test]
    fn test_renderer_idle_cursor_blinks() {
        let t0 = Instant::now();
        let app = scrolled_to_end(Route::About, t0);

        let visible = render_rows(&app, 100, 30, t0);
        let hidden = render_rows(&app, 100, 30, t0 + Duration::from_millis(600));

        let visible_row = idle_row(&visible).unwrap();
        let hidden_row = idle_row(&hidden).unwrap();
        assert!(visible_row.contains(CURSOR_GLYPH));
        assert!(!hidden_row.contains(CURSOR_GLYPH));
        assert_eq!(visible_row.trim_end(), format!("{PROMPT_GLYPH} {CURSOR_GLYPH}"));
    }

    #[test]
    fn test_renderer_same_instant_same_frame() {
        let t0 = Instant::now();
        let app = scrolled_to_end(Route::Projects, t0);
        let now = t0 + Duration::from_millis(1234);
        assert_eq!(render_rows(&app, 100, 30, now), render_rows(&app, 100, 30, now));
    }

    #[test]
    fn test_renderer_tiny_terminal_draws_status_only() {
        let t0 = Instant::now();
        let app = App::new(Route::Home, 40, SETTINGS, t0).unwrap();
        let rows = render_rows(&app, 40, 1, t0);
        assert!(rows[0].contains('/'));
    }

    #[test]
    fn test_renderer_narrow_terminal_keeps_whole_command() {
        let t0 = Instant::now();
        let mut app = App::new(Route::Projects, 50, SETTINGS, t0).unwrap();
        app.viewport_height = 118;
        let rows = render_rows(&app, 50, 120, t0);
        let frame: String = rows.concat().split_whitespace().collect();
        assert!(frame.contains("https://github.com/brookjeynes/slime-rancher-2-interactive-map"));
        assert!(frame.contains("https://github.com/brookjeynes/pixel-art-maker"));
    }
