//! Default command: start the development server.

use std::path::PathBuf;

use clap::Args;
use photocal_config::{CliSettings, Config};
use photocal_server::{Server, missing_recommended_assets, server_config_from_config};

use crate::error::CliError;
use crate::output::{Banner, Output};

/// Arguments for starting the server.
#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover photocal.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to serve the frontend from (overrides config).
    #[arg(short, long)]
    static_root: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (default: first free port from 8000).
    #[arg(short, long, env = "PHOTOCAL_PORT")]
    port: Option<u16>,

    /// Don't open the browser automatically.
    #[arg(long)]
    no_browser: bool,

    /// Enable verbose output (request and startup logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Start the server and serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        match &config.config_path {
            Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
            None => tracing::info!("No photocal.toml found, using defaults"),
        }
        let server_config = server_config_from_config(&config, version.to_owned());

        let server = Server::bind(server_config.clone()).await?;
        let url = server.url();
        let missing_assets = missing_recommended_assets(&server_config.static_root);

        output.banner(&Banner {
            url: &url,
            static_root: &server_config.static_root,
            open_browser: server_config.open_browser,
            missing_assets: &missing_assets,
        });

        server.run().await?;
        output.stopped();

        Ok(())
    }

    /// Collect the overrides given on the command line.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            host: self.host.clone(),
            port: self.port,
            static_root: self.static_root.clone(),
            open_browser: self.no_browser.then_some(false),
        }
    }
}
