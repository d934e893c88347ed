//! Command-line interface entry point for `CurriculumMonitor`

mod args;
mod commands;
mod display;
mod prompt;

use args::{Cli, Command};
use clap::Parser;
use curriculum_monitor::config::Config;
use curriculum_monitor::info;
use curriculum_monitor::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::io;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
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
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let command = args.command.unwrap_or(Command::Session);
    if let Command::Config { subcommand } = command {
        commands::config::run(subcommand, &mut config, &defaults);
        return;
    }

    let mut store = commands::load_store(&config);
    let result = match command {
        Command::Config { .. } => Ok(()),
        Command::Session => {
            commands::session::run(store, &config);
            Ok(())
        }
        Command::Show { grades } => commands::listing::run_show(&mut io::stdout(), &store, grades),
        Command::Failed => commands::listing::run_filter(
            &mut io::stdout(),
            &store,
            commands::listing::Filter::Failed,
        ),
        Command::Ungraded => commands::listing::run_filter(
            &mut io::stdout(),
            &store,
            commands::listing::Filter::Ungraded,
        ),
        Command::Electives => commands::listing::run_filter(
            &mut io::stdout(),
            &store,
            commands::listing::Filter::Electives,
        ),
        Command::Shift { from, save } => {
            commands::shift::run(&mut store, from.as_deref(), save, &config);
            Ok(())
        }
        Command::Export { format, output } => {
            commands::export::run(&store, format.map(Into::into), output.as_deref(), &config);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("✗ Failed to write output: {e}");
        std::process::exit(1);
    }
}
