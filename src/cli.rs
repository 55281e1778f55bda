//! CLI argument definition for termfolio.
//!
//! Only clap is used here; resolving the path into a route happens in
//! `main.rs`.

use std::path::PathBuf;

use clap::Parser;

/// Shortest accepted blink interval.
const MIN_BLINK_MS: u64 = 50;

/// A portfolio rendered as a terminal session.
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about = "A portfolio rendered as a terminal session")]
pub struct Cli {
    /// Page to open first ("/", "/about" or "/projects").
    #[arg(default_value = "/")]
    pub path: String,

    /// Milliseconds between cursor blinks (at least 50).
    #[arg(
        long,
        env = "TERMFOLIO_BLINK_MS",
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(MIN_BLINK_MS..)
    )]
    pub blink_interval_ms: u64,

    /// Show a steady cursor instead of a blinking one.
    #[arg(long)]
    pub no_blink: bool,

    /// Always stack argument tables as on a narrow terminal.
    #[arg(long)]
    pub narrow: bool,

    /// Write logs to this file (the terminal is owned by the viewer).
    #[arg(long, env = "TERMFOLIO_LOG")]
    pub log_file: Option<PathBuf>,

    /// Print the available pages and exit.
    #[arg(long)]
    pub list_routes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["termfolio"]).unwrap();
        assert_eq!(cli.path, "/");
        assert!(!cli.no_blink);
        assert!(!cli.narrow);
        assert!(!cli.list_routes);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "termfolio",
            "/about",
            "--blink-interval-ms",
            "250",
            "--narrow",
            "--no-blink",
        ])
        .unwrap();
        assert_eq!(cli.path, "/about");
        assert_eq!(cli.blink_interval_ms, 250);
        assert!(cli.narrow);
        assert!(cli.no_blink);
    }

    #[test]
    fn test_cli_rejects_tiny_blink_interval() {
        for value in ["0", "1", "49"] {
            let result = Cli::try_parse_from(["termfolio", "--blink-interval-ms", value]);
            assert!(result.is_err(), "{value} was accepted");
        }
        let cli = Cli::try_parse_from(["termfolio", "--blink-interval-ms", "50"]).unwrap();
        assert_eq!(cli.blink_interval_ms, 50);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
