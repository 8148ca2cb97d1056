//! Configuration management for photocal.
//!
//! Parses `photocal.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port (disables port discovery).
    pub port: Option<u16>,
    /// Override static root directory.
    pub static_root: Option<PathBuf>,
    /// Override browser auto-launch.
    pub open_browser: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "photocal.toml";

/// Default static root directory name.
const DEFAULT_STATIC_ROOT: &str = "frontend";

/// Upper bound for `server.port_attempts`.
const MAX_PORT_ATTEMPTS: u16 = 1000;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Frontend configuration (paths are relative strings from TOML).
    frontend: FrontendConfigRaw,

    /// Resolved frontend configuration (set after loading).
    #[serde(skip)]
    pub frontend_resolved: FrontendConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Fixed server port. `None` means discover a free one.
    pub port: Option<u16>,
    /// First port probed by discovery.
    pub port_range_start: u16,
    /// Number of consecutive ports probed by discovery.
    pub port_attempts: u16,
    /// Open the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: None,
            port_range_start: 8000,
            port_attempts: 10,
            open_browser: true,
        }
    }
}

/// Raw frontend configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FrontendConfigRaw {
    static_root: Option<String>,
}

/// Resolved frontend configuration with absolute paths.
#[derive(Debug, Default)]
pub struct FrontendConfig {
    /// Directory the static files are served from.
    pub static_root: PathBuf,
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
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `photocal.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = Some(port);
        }
        if let Some(static_root) = &settings.static_root {
            self.frontend_resolved.static_root.clone_from(static_root);
        }
        if let Some(open_browser) = settings.open_browser {
            self.server.open_browser = open_browser;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            frontend: FrontendConfigRaw::default(),
            frontend_resolved: FrontendConfig {
                static_root: base.join(DEFAULT_STATIC_ROOT),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::load`] after CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 would let the OS pick a random port, which the banner and
        // browser launch can't know in advance
        if self.server.port == Some(0) {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        if self.server.port_range_start == 0 {
            return Err(ConfigError::Validation(
                "server.port_range_start cannot be 0".to_owned(),
            ));
        }
        if self.server.port_attempts == 0 || self.server.port_attempts > MAX_PORT_ATTEMPTS {
            return Err(ConfigError::Validation(format!(
                "server.port_attempts must be between 1 and {MAX_PORT_ATTEMPTS}"
            )));
        }

        Ok(())
    }

    /// Resolve relative paths against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let static_root = self
            .frontend
            .static_root
            .as_deref()
            .unwrap_or(DEFAULT_STATIC_ROOT);

        self.frontend_resolved = FrontendConfig {
            static_root: config_dir.join(static_root),
        };
    }
}
