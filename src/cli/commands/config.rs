//! `config` subcommand: show, change and reset the persisted settings
//!
//! Every action writes through a [`Prompter`] and saves to an explicit file,
//! so the handlers run the same against stdin/stdout and the user config
//! file as against buffers and a scratch file.

use crate::args::ConfigSubcommand;
use crate::prompt::Prompter;
use curriculum_monitor::config::Config;
use curriculum_monitor::info;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run a config subcommand against the user config file; exits with status 1
/// on failure
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let config_file = Config::get_config_file_path();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let action = subcommand.unwrap_or(ConfigSubcommand::Get { key: None });

    if let Err(e) = execute(&mut prompter, action, config, defaults, &config_file) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Apply one config action, persisting changes to `config_file`
///
/// # Errors
/// Returns a printable message for an unknown key, an invalid value, or a
/// file that cannot be written or removed.
pub fn execute<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    action: ConfigSubcommand,
    config: &mut Config,
    defaults: &Config,
    config_file: &Path,
) -> Result<(), String> {
    match action {
        ConfigSubcommand::Get { key: None } => {
            write!(prompter.out(), "\n=== Configuration ===\n\n{config}").map_err(output_error)
        }
        ConfigSubcommand::Get { key: Some(key) } => {
            let value = config
                .get(&key)
                .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
            writeln!(prompter.out(), "{value}").map_err(output_error)
        }
        ConfigSubcommand::Set { key, value } => {
            config.set(&key, &value)?;
            persist(config, config_file)?;
            info!("Config '{key}' set to '{value}'");
            writeln!(prompter.out(), "✓ Set {key} = {value}").map_err(output_error)
        }
        ConfigSubcommand::Unset { key } => {
            config.unset(&key, defaults)?;
            persist(config, config_file)?;
            writeln!(prompter.out(), "✓ Reset {key} to default").map_err(output_error)
        }
        ConfigSubcommand::Reset => reset(prompter, config_file),
    }
}

fn persist(config: &Config, config_file: &Path) -> Result<(), String> {
    config
        .save_to(config_file)
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn reset<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config_file: &Path,
) -> Result<(), String> {
    if !config_file.exists() {
        return writeln!(prompter.out(), "✓ Config is already at defaults").map_err(output_error);
    }

    // Closed input counts as "no"
    let confirmed = prompter
        .confirm("Are you sure you want to reset config to defaults? (y/n): ")
        .unwrap_or(false);
    if !confirmed {
        return writeln!(prompter.out(), "✗ Reset cancelled").map_err(output_error);
    }

    Config::reset_file(config_file).map_err(|e| format!("Failed to remove config file: {e}"))?;
    writeln!(prompter.out(), "✓ Config reset to defaults").map_err(output_error)
}

fn output_error(e: io::Error) -> String {
    format!("Failed to write output: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn prompter(input: &str) -> TestPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: &mut TestPrompter) -> String {
        String::from_utf8(p.out().clone()).unwrap()
    }

    fn scratch() -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        (dir, file)
    }

    #[test]
    fn test_get_single_key() {
        let (_dir, file) = scratch();
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let mut p = prompter("");

        let action = ConfigSubcommand::Get {
            key: Some("elective_marker".to_string()),
        };
        execute(&mut p, action, &mut config, &defaults, &file).unwrap();

        assert_eq!(output(&mut p), format!("{}\n", defaults.electives.marker));
        assert!(!file.exists());
    }

    #[test]
    fn test_get_unknown_key_fails() {
        let (_dir, file) = scratch();
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();

        let action = ConfigSubcommand::Get {
            key: Some("colour".to_string()),
        };
        let err = execute(&mut prompter(""), action, &mut config, &defaults, &file).unwrap_err();
        assert!(err.contains("colour"));
    }

    #[test]
    fn test_set_persists_to_file() {
        let (_dir, file) = scratch();
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let mut p = prompter("");

        let action = ConfigSubcommand::Set {
            key: "out_dir".to_string(),
            value: "copies".to_string(),
        };
        execute(&mut p, action, &mut config, &defaults, &file).unwrap();

        assert!(output(&mut p).contains("✓ Set out_dir = copies"));
        assert_eq!(Config::load_from(&file).paths.out_dir, "copies");
    }

    #[test]
    fn test_set_invalid_value_leaves_file_alone() {
        let (_dir, file) = scratch();
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();

        let action = ConfigSubcommand::Set {
            key: "verbose".to_string(),
            value: "maybe".to_string(),
        };
        assert!(execute(&mut prompter(""), action, &mut config, &defaults, &file).is_err());
        assert!(!file.exists());
    }

    #[test]
    fn test_unset_restores_default() {
        let (_dir, file) = scratch();
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        config.paths.shift_file = "old.csv".to_string();

        let action = ConfigSubcommand::Unset {
            key: "shift_file".to_string(),
        };
        execute(&mut prompter(""), action, &mut config, &defaults, &file).unwrap();

        assert_eq!(config.paths.shift_file, defaults.paths.shift_file);
        assert_eq!(
            Config::load_from(&file).paths.shift_file,
            defaults.paths.shift_file
        );
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let (_dir, file) = scratch();
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        defaults.save_to(&file).unwrap();

        let mut p = prompter("n\n");
        execute(&mut p, ConfigSubcommand::Reset, &mut config, &defaults, &file).unwrap();
        assert!(output(&mut p).contains("Reset cancelled"));
        assert!(file.exists());

        let mut p = prompter("y\n");
        execute(&mut p, ConfigSubcommand::Reset, &mut config, &defaults, &file).unwrap();
        assert!(output(&mut p).contains("✓ Config reset to defaults"));
        assert!(!file.exists());
    }

    #[test]
    fn test_reset_without_file_skips_prompt() {
        let (_dir, file) = scratch();
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let mut p = prompter("");

        execute(&mut p, ConfigSubcommand::Reset, &mut config, &defaults, &file).unwrap();
        assert!(output(&mut p).contains("already at defaults"));
    }
}
