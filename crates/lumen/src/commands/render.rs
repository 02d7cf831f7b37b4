//! `lumen render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use console::Term;
use lumen_config::{CliSettings, Config, DEFAULT_PHOTO};
use lumen_sidebar::{
    Links, Location, Menu, Sidebar, SidebarProps, SiteMetadata, resolve_pathname,
};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Current page path (default: "/", or the location in --props).
    #[arg(short, long)]
    path: Option<String>,

    /// Page-context JSON file with `location` and `data.site.siteMetadata`.
    #[arg(long, conflicts_with_all = ["config", "subtitle", "copyright"])]
    props: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover lumen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Author photo path (overrides config).
    #[arg(long)]
    photo: Option<String>,

    /// Site subtitle (overrides config).
    #[arg(long)]
    subtitle: Option<String>,

    /// Copyright line (overrides config).
    #[arg(long)]
    copyright: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or props cannot be loaded, or the
    /// output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let html = self.render()?;
        info!(
            output = %self.output_target(),
            bytes = html.len(),
            "Rendered sidebar"
        );

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                Output::new().success(&format!("Sidebar written to {}", path.display()));
            }
            None => Term::stdout().write_str(&html)?,
        }
        Ok(())
    }

    /// Render the sidebar HTML from props or configuration.
    fn render(&self) -> Result<String, CliError> {
        let (metadata, location, photo) = match &self.props {
            Some(props_path) => self.load_props(props_path)?,
            None => self.load_config()?,
        };

        let pathname = resolve_pathname(location.as_ref()).to_owned();
        info!(%pathname, %photo, "Resolved sidebar location");
        let sidebar =
            Sidebar::with_renderers(photo, Menu::new().with_active_path(pathname), Links);
        Ok(sidebar.render(location.as_ref(), &metadata))
    }

    /// Where the rendered HTML goes, for log output.
    fn output_target(&self) -> String {
        self.output
            .as_ref()
            .map_or_else(|| "stdout".to_owned(), |path| path.display().to_string())
    }

    fn load_props(
        &self,
        props_path: &Path,
    ) -> Result<(SiteMetadata, Option<Location>, String), CliError> {
        let content = std::fs::read_to_string(props_path)?;
        let props = SidebarProps::from_json(&content)?;

        let location = match &self.path {
            Some(path) => Some(Location::new(path.clone())),
            None => props.location,
        };
        let photo = self
            .photo
            .clone()
            .unwrap_or_else(|| DEFAULT_PHOTO.to_owned());

        Ok((props.data.site.site_metadata, location, photo))
    }

    fn load_config(&self) -> Result<(SiteMetadata, Option<Location>, String), CliError> {
        let cli_settings = CliSettings {
            photo: self.photo.clone(),
            subtitle: self.subtitle.clone(),
            copyright: self.copyright.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let location = self.path.clone().map(Location::new);
        Ok((config.site, location, config.sidebar.photo))
    }
}
