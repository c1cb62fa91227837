//! Command-line interface entry point for `advising`

mod args;
mod commands;

use advising::config::Config;
use advising::info;
use advising::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use args::{Cli, Command};
use clap::Parser;
use std::path::{Path, PathBuf};

fn main() {
    let args = Cli::parse();

    // `stored` mirrors the config file; `config` adds this run's CLI overrides
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        start_file_logging(log_path, verbose);
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Check {
            catalog,
            session,
            course,
            json,
            eval,
        } => {
            commands::check::run(&catalog, &session, &course, json, &eval.simulate, &config);
        }
        Command::Sweep {
            catalog,
            session,
            available,
            format,
            output,
            save,
            eval,
        } => {
            let options = commands::sweep::SweepOptions {
                available,
                format: &format,
                output: output.as_deref(),
                save,
                simulate: &eval.simulate,
            };
            commands::sweep::run(&catalog, &session, &options, &config);
        }
    }
}

fn start_file_logging(log_path: &Path, verbose: bool) {
    let display_path = log_path.display();

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            eprintln!("✗ Failed to create log directory: {}", parent.display());
            return;
        }
    }

    match init_file_logging(log_path) {
        Ok(()) if verbose => eprintln!("✓ File logging initialized at: {display_path}"),
        Ok(()) => info!("File logging initialized at: {display_path}"),
        Err(e) => eprintln!("✗ Failed to initialize file logging at {display_path}: {e}"),
    }
}
