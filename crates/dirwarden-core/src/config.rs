use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::DirWardenError;
use crate::paths::{expand_path_template, DenylistEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub guard: GuardConfig,
    /// Scanned after the built-in denylist, in file order.
    #[serde(default)]
    pub extra_entries: Vec<DenylistEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Whether `--force` may bypass a dangerous verdict.
    pub allow_override: bool,
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: PathBuf,
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            guard: GuardConfig {
                allow_override: true,
            },
            extra_entries: Vec::new(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let output = toml::to_string_pretty(self).context("render config TOML")?;
        Ok(output)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when it exists, otherwise falls back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let contents = self.to_toml_string()?;
        fs::write(path, contents).with_context(|| format!("write config at {}", path.display()))?;
        Ok(())
    }

    fn validate(&self) -> Result<(), DirWardenError> {
        for entry in &self.extra_entries {
            if entry.label.trim().is_empty() {
                return Err(DirWardenError::InvalidConfig(format!(
                    "denylist entry for '{}' has an empty label",
                    entry.path
                )));
            }
            if entry.path.trim().is_empty() {
                return Err(DirWardenError::InvalidConfig(format!(
                    "denylist entry '{}' has an empty path",
                    entry.label
                )));
            }
            if expand_path_template(&entry.path, Some(Path::new("/"))).is_none() {
                return Err(DirWardenError::InvalidConfig(format!(
                    "denylist entry '{}': ${{HOME}} must be followed by a separator in '{}'",
                    entry.label, entry.path
                )));
            }
        }
        Ok(())
    }
}

impl ConfigPaths {
    pub fn resolve() -> Result<Self> {
        let project_dirs = ProjectDirs::from("io", "dirwarden", "dirwarden")
            .ok_or_else(|| anyhow::anyhow!("unable to determine project directories"))?;
        Ok(Self {
            config_path: project_dirs.config_dir().join("config.toml"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_extra_entries() {
        let config = Config::from_toml_str(
            r#"
            [guard]
            allow_override = false

            [[extra_entries]]
            label = "Projects folder"
            path = "${HOME}/Projects"

            [[extra_entries]]
            label = "System etc folder"
            path = "/etc"
            "#,
        )
        .unwrap();

        assert!(!config.guard.allow_override);
        assert_eq!(config.extra_entries.len(), 2);
        assert_eq!(
            config.extra_entries[0],
            DenylistEntry::new("Projects folder", "${HOME}/Projects")
        );
    }

    #[test]
    fn test_extra_entries_optional() {
        let config = Config::from_toml_str("[guard]\nallow_override = true\n").unwrap();
        assert!(config.extra_entries.is_empty());
    }

    #[test]
    fn test_rejects_empty_path() {
        let result = Config::from_toml_str(
            r#"
            [guard]
            allow_override = true

            [[extra_entries]]
            label = "Nothing"
            path = " "
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_home_glued_to_name() {
        let result = Config::from_toml_str(
            r#"
            [guard]
            allow_override = true

            [[extra_entries]]
            label = "Glued"
            path = "${HOME}foo"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        let mut config = Config::default_config();
        config
            .extra_entries
            .push(DenylistEntry::new("System etc folder", "/etc"));
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(loaded.guard.allow_override);
        assert_eq!(loaded.extra_entries, config.extra_entries);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(config.guard.allow_override);
        assert!(config.extra_entries.is_empty());
    }
}
