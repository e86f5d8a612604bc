use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dirwarden_core::config::{Config, ConfigPaths};

/// Uses `explicit` when given, otherwise the platform config path.
pub fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(ConfigPaths::resolve()?.config_path),
    }
}

/// An explicitly named config must exist; the default one is optional.
pub fn load_effective(explicit: Option<PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => {
            Config::load(&path).with_context(|| format!("load config {}", path.display()))
        }
        None => Config::load_or_default(&config_path(None)?),
    }
}

pub fn print_effective(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_effective(config_path)?;
    let output = config.to_toml_string()?;
    println!("{}", output);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    Config::default_config().save(config_path)?;
    println!("Config written to {}", config_path.display());
    Ok(())
}
