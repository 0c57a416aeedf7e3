use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

impl Config {
    /// Location of the config file, `~/.config/cursor-launch/config.toml`.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home
            .join(".config")
            .join("cursor-launch")
            .join("config.toml"))
    }

    /// Load the config from its default location, or defaults if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load the config from `path`, or defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config to its default location.
    ///
    /// # Errors
    ///
    /// Fails when the config directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write the config to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails on an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "cursor.path" => Ok(display_or_empty(self.cursor.path.as_deref())),
            "cursor.search_path" => Ok(self.cursor.search_path.to_string()),
            "workspace.enabled" => Ok(self.workspace.enabled.to_string()),
            "workspace.file" => Ok(self.workspace.file.display().to_string()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or a value that does not parse for it.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cursor.path" => {
                self.cursor.path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "cursor.search_path" => {
                self.cursor.search_path = parse_bool(value)?;
            }
            "workspace.enabled" => {
                self.workspace.enabled = parse_bool(value)?;
            }
            "workspace.file" => {
                if value.is_empty() {
                    anyhow::bail!("workspace.file cannot be empty");
                }
                self.workspace.file = PathBuf::from(value);
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

fn display_or_empty(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .with_context(|| format!("Invalid boolean value: {value}"))
}
