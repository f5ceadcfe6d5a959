#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo binary.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `GRIMOIRE_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Grimoire Demo — animated occult-terminal panels

USAGE:
    grimoire-demo [OPTIONS]

OPTIONS:
    --panel=N            Start on panel N, 1-indexed (default: 1)
    --seed=N             Seed for the randomized layers (default: 7)
    --no-mouse           Disable mouse event capture
    --help, -h           Show this help message
    --version, -V        Show version

PANELS:
    1  Midnight          Neural grimoire, cyan glitch styling
    2  Dreamcast         Neural grimoire, orange floating sigils
    3  Parasocial        Terminal panel with ASCII noise and ticker

KEYBINDINGS:
    1-3             Switch panels
    Tab             Cycle panels
    Space / Enter   Reveal or seal the detail block
    Left / Right    Jump to the previous / next phase
    q / Esc         Quit

ENVIRONMENT VARIABLES:
    GRIMOIRE_PANEL           Override --panel
    GRIMOIRE_SEED            Override --seed
    GRIMOIRE_EXIT_AFTER_MS   Auto-quit after N milliseconds (for testing)
    GRIMOIRE_LOG             Write tracing output to this file";

/// Parsed command-line options.
pub struct Opts {
    /// Starting panel (1-indexed).
    pub start_panel: u16,
    /// Seed for randomized layers.
    pub seed: u64,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
    /// Log file path, if tracing output is wanted.
    pub log_file: Option<String>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            start_panel: 1,
            seed: 7,
            mouse: true,
            exit_after_ms: 0,
            log_file: None,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("GRIMOIRE_PANEL")
            && let Ok(n) = val.parse()
        {
            opts.start_panel = n;
        }
        if let Ok(val) = env::var("GRIMOIRE_SEED")
            && let Ok(n) = val.parse()
        {
            opts.seed = n;
        }
        if let Ok(val) = env::var("GRIMOIRE_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }
        if let Ok(val) = env::var("GRIMOIRE_LOG") {
            opts.log_file = Some(val);
        }

        let args: Vec<String> = env::args().skip(1).collect();
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("grimoire-demo {VERSION}");
                    process::exit(0);
                }
                "--no-mouse" => {
                    opts.mouse = false;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--panel=") {
                        match val.parse() {
                            Ok(n) => opts.start_panel = n,
                            Err(_) => {
                                eprintln!("Invalid --panel value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        match val.parse() {
                            Ok(n) => opts.seed = n,
                            Err(_) => {
                                eprintln!("Invalid --seed value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        match val.parse() {
                            Ok(n) => opts.exit_after_ms = n,
                            Err(_) => {
                                eprintln!("Invalid --exit-after-ms value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
            i += 1;
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.start_panel, 1);
        assert_eq!(opts.seed, 7);
        assert!(opts.mouse);
        assert_eq!(opts.exit_after_ms, 0);
        assert!(opts.log_file.is_none());
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
