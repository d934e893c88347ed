//! CLI argument definitions for `CurriculumMonitor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use curriculum_monitor::config::ConfigOverrides;
use curriculum_monitor::core::report::ReportFormat;
use curriculum_monitor::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Output format argument for `export`
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Delimited copy in the input schema
    Csv,
    /// Fixed-width text report
    Text,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Text => Self::Text,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Run the interactive menu (default when no command is given).
    Session,
    /// Show courses term by term.
    ///
    /// With --grades, also lists graded courses in ascending and descending order.
    Show {
        /// Include the grade column and the sorted grade listings
        #[arg(short, long)]
        grades: bool,
    },
    /// List courses with a failing grade.
    Failed,
    /// List courses without a grade.
    Ungraded,
    /// List courses tagged as electives.
    Electives,
    /// Carry courses from another program into the course list by title.
    Shift {
        /// Course file of the previous program (defaults to config `shift_file`)
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,

        /// Write the merged list to the output directory afterwards
        #[arg(long)]
        save: bool,
    },
    /// Write a copy of the course list.
    ///
    /// Without --format, writes both the CSV copy and the text report.
    Export {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file path (only with --format; defaults to the output directory)
        #[arg(short, long, value_name = "FILE", requires = "format")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "curriculum",
    about = "Curriculum monitoring command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Course data file to load
    #[arg(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Course file of the program being shifted from
    #[arg(long = "shift-file", value_name = "FILE")]
    pub shift_file: Option<PathBuf>,

    /// Directory for saved copies
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Course code that marks an elective
    #[arg(long = "elective-marker", value_name = "CODE")]
    pub elective_marker: Option<String>,

    /// Subcommand to execute; the interactive session runs when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means the flag was not given and the config value stays.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_file: self.data_file.as_ref().map(path_string),
            shift_file: self.shift_file.as_ref().map(path_string),
            out_dir: self.out_dir.as_ref().map(path_string),
            elective_marker: self.elective_marker.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_no_command_means_session() {
        let cli = Cli::try_parse_from(["curriculum"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::try_parse_from(["curriculum", "failed"]).unwrap();

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.shift_file.is_none());
        assert!(overrides.out_dir.is_none());
        assert!(overrides.elective_marker.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::try_parse_from([
            "curriculum",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--data-file",
            "grades.csv",
            "--shift-file",
            "old.csv",
            "--out-dir",
            "/output",
            "--elective-marker",
            "ELEC",
            "show",
            "--grades",
        ])
        .unwrap();

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_file, Some("grades.csv".to_string()));
        assert_eq!(overrides.shift_file, Some("old.csv".to_string()));
        assert_eq!(overrides.out_dir, Some("/output".to_string()));
        assert_eq!(overrides.elective_marker, Some("ELEC".to_string()));
        assert!(matches!(cli.command, Some(Command::Show { grades: true })));
    }

    #[test]
    fn test_export_output_requires_format() {
        assert!(Cli::try_parse_from(["curriculum", "export", "-o", "x.csv"]).is_err());

        let cli =
            Cli::try_parse_from(["curriculum", "export", "-f", "text", "-o", "x.txt"]).unwrap();
        match cli.command {
            Some(Command::Export { format, output }) => {
                assert_eq!(format, Some(FormatArg::Text));
                assert_eq!(output, Some(PathBuf::from("x.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_format_arg_to_report_format() {
        assert_eq!(ReportFormat::from(FormatArg::Csv), ReportFormat::Csv);
        assert_eq!(ReportFormat::from(FormatArg::Text), ReportFormat::Text);
    }
}
