//! Configuration management for Lumen.
//!
//! Parses `lumen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.subtitle`
//! - `site.copyright`
//! - `site.author.email`
//! - `sidebar.photo`

mod expand;

use std::path::{Path, PathBuf};

use lumen_sidebar::{ROOT_PATH, SiteMetadata};
use serde::Deserialize;
use tracing::info;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override author photo path.
    pub photo: Option<String>,
    /// Override site subtitle.
    pub subtitle: Option<String>,
    /// Override copyright line.
    pub copyright: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "lumen.toml";

/// Default author photo path, resolved by the site's static asset pipeline.
pub const DEFAULT_PHOTO: &str = "/NewPixelMe.png";

/// Application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Site metadata rendered by the sidebar.
    pub site: SiteMetadata,
    /// Sidebar presentation settings.
    #[serde(default)]
    pub sidebar: SidebarConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Sidebar presentation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Author photo path.
    pub photo: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            photo: DEFAULT_PHOTO.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.copyright`").
        field: String,
        /// Error message (e.g., "${`YEAR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lumen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file exists, or an error if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                Self::discover_config(&cwd)
                    .ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?
            }
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML content.
    ///
    /// Expands environment variables and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(photo) = &settings.photo {
            self.sidebar.photo.clone_from(photo);
        }
        if let Some(subtitle) = &settings.subtitle {
            self.site.subtitle.clone_from(subtitle);
        }
        if let Some(copyright) = &settings.copyright {
            self.site.copyright.clone_from(copyright);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            author = %config.site.author.name,
            menu_items = config.site.menu.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.sidebar.photo, "sidebar.photo")?;
        self.validate_menu()?;
        Ok(())
    }

    /// Menu paths are site routes and must be absolute.
    fn validate_menu(&self) -> Result<(), ConfigError> {
        for (index, item) in self.site.menu.iter().enumerate() {
            if !item.path.starts_with(ROOT_PATH) {
                return Err(ConfigError::Validation(format!(
                    "site.menu[{index}].path must start with '/', got {:?}",
                    item.path
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.subtitle = expand::expand_env(&self.site.subtitle, "site.subtitle")?;
        self.site.copyright = expand::expand_env(&self.site.copyright, "site.copyright")?;
        if let Some(ref email) = self.site.author.email {
            self.site.author.email = Some(expand::expand_env(email, "site.author.email")?);
        }
        self.sidebar.photo = expand::expand_env(&self.sidebar.photo, "sidebar.photo")?;
        Ok(())
    }
}
