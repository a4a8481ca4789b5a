//! Config command
//!
//! Manage cr-threads configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

use ct_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Print the configuration file path
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
        ConfigCommand::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn show_config(config_path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    if !config_path.exists() {
        eprintln!(
            "{} No configuration at {}, showing defaults. Run '{}' to create one.",
            "⚠".yellow(),
            config_path.display(),
            "cr-threads config init".cyan()
        );
    }

    let config = Config::load(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", "Configuration:".bold().underline());
        println!("{}", config_path.display().to_string().dimmed());
        println!();
        print!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if config_path.exists() && !force {
        eprintln!(
            "{} Configuration already exists at {}. Use '{}' to overwrite.",
            "⚠".yellow(),
            config_path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    Config::default()
        .save(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        config_path.display()
    );

    Ok(())
}

fn validate_config(config_path: &Path) -> Result<()> {
    use colored::Colorize;

    if !config_path.exists() {
        bail!("Configuration not found at {}", config_path.display());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    println!("{} Configuration is valid", "✓".green());

    let manager = ct_core::export::ExportManager::new();
    if !manager.has_format(&config.export.default_format) {
        println!(
            "{} Unknown export format '{}' (available: {})",
            "⚠".yellow(),
            config.export.default_format,
            manager.available_formats().join(", ")
        );
    }
    for file in &config.sources.files {
        if !file.exists() {
            println!("{} Comment source {} does not exist", "⚠".yellow(), file.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let path = super::super::default_config_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[export]\ndefault_format = \"json\"\n").unwrap();

        init_config(&path, false).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("\"json\""));

        init_config(&path, true).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.export.default_format, "markdown");
    }

    #[test]
    fn test_validate_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(validate_config(&path).is_err());

        fs::write(&path, "[aggregation]\norder = \"sideways\"\n").unwrap();
        let err = validate_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid configuration"));

        fs::write(&path, "[export]\npretty = false\n").unwrap();
        assert!(validate_config(&path).is_ok());
    }
}
