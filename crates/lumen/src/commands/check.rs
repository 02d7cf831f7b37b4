//! `lumen check` command implementation.

use std::path::PathBuf;

use clap::Args;
use lumen_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover lumen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        output.heading(&config.site.author.name);
        if let Some(path) = &config.config_path {
            output.field("Config", &path.display().to_string());
        }
        output.field("Subtitle", &config.site.subtitle);
        output.field("Copyright", &config.site.copyright);
        output.field("Photo", &config.sidebar.photo);
        if config.site.menu.is_empty() {
            output.warning("Menu has no items");
        } else {
            output.field("Menu items", &config.site.menu.len().to_string());
        }
        output.success("Configuration is valid");
        Ok(())
    }
}
