//! Config file commands

use clap::ValueEnum;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::output::json::format_json;
use crate::session::Portal;

/// Keys accepted by `config set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum ConfigKey {
    ApiHost,
    Portal,
    StateDir,
    Format,
    PageSize,
}

/// Print the config file with defaults filled in
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_at(opts.config_ref())?;

    if opts.format == Some(OutputFormat::Json) {
        println!("{}", format_json(&config)?);
        return Ok(());
    }

    println!("{} {}\n", "Config file:".bold(), path.display().to_string().cyan());
    println!("api_host:  {}", config.api_host());
    println!("portal:    {}", config.portal());
    println!("state_dir: {}", config.state_dir()?.display());
    println!(
        "format:    {}",
        config.preferences.format.as_deref().unwrap_or("table")
    );
    println!("page_size: {}", config.preferences.page_size);
    Ok(())
}

/// Set one key and write the config file back
pub fn set(opts: &GlobalOptions, key: ConfigKey, value: &str) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    apply(&mut config, key, value)?;
    config.save_at(opts.config_ref())?;

    println!(
        "{} Saved to {}",
        "✓".green(),
        Config::resolve_path(opts.config_ref())?.display()
    );
    Ok(())
}

fn apply(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Invalid("value must not be empty".to_string()).into());
    }

    match key {
        ConfigKey::ApiHost => config.api_host = Some(value.trim_end_matches('/').to_string()),
        ConfigKey::Portal => {
            config.portal = Some(value.parse::<Portal>().map_err(ConfigError::Invalid)?);
        }
        ConfigKey::StateDir => config.state_dir = Some(value.into()),
        ConfigKey::Format => {
            if OutputFormat::from_preference(value).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "unknown format '{}' (table, pretty, json)",
                    value
                ))
                .into());
            }
            config.preferences.format = Some(value.to_lowercase());
        }
        ConfigKey::PageSize => {
            let size = value
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("page_size must be a positive number, got '{}'", value))
                })?;
            config.preferences.page_size = size;
        }
    }
    Ok(())
}
