//! Entry point: wires CLI → router → layout → TUI event loop.
//!
//! This is the thin orchestrator that connects all pipeline stages.
//! It handles CLI argument parsing, terminal initialization, the event
//! loop with its blink-driven redraws, and graceful shutdown.

mod cli;
mod logging;

use std::time::{Duration, Instant};

use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use termfolio::app::{App, ViewSettings};
use termfolio::renderer;
use termfolio::router::Route;

use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    // Install color_eyre error/panic hooks for pretty backtraces.
    color_eyre::install()?;

    // Parse CLI arguments.
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    if cli.list_routes {
        for route in Route::ALL {
            println!("{:<10} {}", route.path(), route.title());
        }
        return Ok(());
    }

    // Resolve the page before touching the terminal so errors print normally.
    let route = Route::from_path(&cli.path)?;
    let settings = ViewSettings {
        blink_interval: (!cli.no_blink).then(|| Duration::from_millis(cli.blink_interval_ms)),
        force_narrow: cli.narrow,
    };

    // Get initial terminal size for layout.
    let (cols, _rows) = ratatui::crossterm::terminal::size()?;
    let mut app = App::new(route, cols, settings, Instant::now())?;

    // Chain our panic hook to restore the terminal before printing the backtrace.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        original_hook(info);
    }));

    // Initialize the terminal (enters raw mode + alternate screen).
    let mut terminal = ratatui::init();

    // Main event loop.
    let result = run_event_loop(&mut terminal, &mut app);

    // Always restore the terminal, even if the loop returned an error.
    ratatui::restore();
    app.unmount();
    tracing::info!("exited");

    result
}

/// Runs the TUI event loop until the user quits or an error occurs.
///
/// Waits for input no longer than the next cursor toggle, so blinking
/// prompts redraw on time; with nothing blinking it blocks.
fn run_event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    loop {
        // Update viewport height from current terminal size.
        app.viewport_height = terminal
            .size()?
            .height
            .saturating_sub(renderer::CHROME_ROWS) as usize;

        let now = Instant::now();
        terminal.draw(|frame| renderer::draw(frame, app, now))?;

        let ready = match app.next_wakeup(now) {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if !ready {
            // Timer tick: redraw with the new cursor phase.
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key, Instant::now())?;
            }
            Event::Resize(cols, _rows) => app.resize(cols),
            // Ignore key releases, mouse, focus, and paste events.
            _ => {}
        }

        if app.quit {
            break;
        }
    }

    Ok(())
}
