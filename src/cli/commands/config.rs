//! `advising config`: inspect and edit the stored configuration file

use crate::args::ConfigSubcommand;
use advising::config::Config;
use advising::{debug, error};
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// `config` is the config as stored on disk, without this run's CLI overrides.
/// Edits are persisted immediately; a failed edit or save exits with status 1.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => {
            print!("{config}");
            Ok(None)
        }
        Some(ConfigSubcommand::Get { key: None }) => {
            print!("{config}");
            Ok(None)
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_file(),
    };

    match outcome {
        Ok(Some(message)) => println!("{message}"),
        Ok(None) => {}
        Err(message) => {
            eprintln!("✗ {message}");
            std::process::exit(1);
        }
    }
}

fn show_key(config: &Config, key: &str) -> Result<Option<String>, String> {
    config
        .get(key)
        .map(Some)
        .ok_or_else(|| format!("No config key named '{key}'"))
}

fn set_key(config: &mut Config, key: &str, value: &str) -> Result<Option<String>, String> {
    config.set(key, value)?;
    persist(config)?;
    let stored = config.get(key).unwrap_or_else(|| value.to_string());
    Ok(Some(format!("✓ {key} = {stored}")))
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) -> Result<Option<String>, String> {
    config.unset(key, defaults)?;
    persist(config)?;
    let restored = config.get(key).unwrap_or_default();
    Ok(Some(format!("✓ {key} restored to default ({restored})")))
}

fn reset_file() -> Result<Option<String>, String> {
    let path = Config::get_config_file_path();
    if !path.exists() {
        return Ok(Some("Nothing to reset: no config file present".to_string()));
    }

    let prompt = format!("Delete {} and fall back to defaults? [y/N] ", path.display());
    if !confirm(&prompt) {
        return Ok(Some("Left config file untouched".to_string()));
    }

    Config::reset().map_err(|e| {
        error!("Failed to remove config file: {e}");
        format!("Could not remove {}: {e}", path.display())
    })?;
    Ok(Some("✓ Config file removed; defaults apply".to_string()))
}

fn persist(config: &Config) -> Result<(), String> {
    config.save().map_err(|e| {
        error!("Failed to save config: {e}");
        format!("Could not write config file: {e}")
    })?;
    debug!("Config written to {}", Config::get_config_file_path().display());
    Ok(())
}

/// Ask a yes/no question on stdin; anything but an explicit yes declines
fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes_accepts_y_and_yes_in_any_case() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(is_yes("Yes\r\n"));
    }

    #[test]
    fn test_is_yes_declines_everything_else() {
        assert!(!is_yes(""));
        assert!(!is_yes("\n"));
        assert!(!is_yes("n"));
        assert!(!is_yes("yeah"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_show_key_unknown_is_error() {
        let config = Config::from_defaults();
        assert!(show_key(&config, "logging.nope").is_err());
        assert_eq!(
            show_key(&config, "status_vocabulary"),
            Ok(Some("grades".to_string()))
        );
    }
}
