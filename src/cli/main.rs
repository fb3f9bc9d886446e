//! Command-line interface entry point for `ModuleGuide`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use module_guide::config::Config;
use module_guide::info;
use module_guide::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            match commands::config::run(subcommand, &mut config, &defaults) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("✗ {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Overview {
            guide,
            courses,
            format,
            output,
            save,
        } => {
            let request = commands::overview::OverviewRequest {
                guide: &guide,
                courses: &courses,
                format: format.into(),
                output: output.as_deref(),
                save,
            };
            match commands::overview::run(&request, &config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("✗ {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
