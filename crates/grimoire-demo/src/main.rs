#![forbid(unsafe_code)]

//! Grimoire demo binary entry point.

mod app;
mod cli;

use std::time::Duration;

use app::{AppModel, PanelId};
use grimoire_runtime::{Program, ProgramConfig};

fn main() {
    let opts = cli::Opts::parse();

    // The terminal owns stdout while the program runs, so tracing goes
    // to a file or nowhere.
    if let Some(path) = &opts.log_file {
        match std::fs::File::create(path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
                    )
                    .with_writer(file)
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to open log file {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    let start_panel = PanelId::from_index_or_default(opts.start_panel);
    let mut model = AppModel::new(opts.seed).start_panel(start_panel);
    if opts.exit_after_ms > 0 {
        model = model.exit_after(Duration::from_millis(opts.exit_after_ms));
    }

    let config = ProgramConfig {
        mouse_capture: opts.mouse,
        ..ProgramConfig::default()
    };
    if let Err(e) = Program::with_config(model, config).run() {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
