//! Config command handler

use crate::args::ConfigSubcommand;
use module_guide::config::Config;
use module_guide::{info, warn};
use std::io::{self, Write};

/// Keys accepted by `config get|set|unset`
const KEYS: [&str; 6] = [
    "level",
    "file",
    "verbose",
    "language",
    "elective_marker",
    "reports_dir",
];

/// Dispatch config subcommands
///
/// # Errors
/// Returns a message for unknown keys, invalid values, or I/O failures
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            persist(config)?;
            info!("Config key '{key}' set to '{value}'");
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            persist(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nFile: {}", Config::get_config_file_path().display());
        return Ok(());
    };
    config.get(key).map_or_else(
        || {
            Err(format!(
                "Unknown config key: '{key}' (known keys: {})",
                KEYS.join(", ")
            ))
        },
        |value| {
            println!("{value}");
            Ok(())
        },
    )
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        warn!("Configuration file removed; defaults apply on next start");
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
