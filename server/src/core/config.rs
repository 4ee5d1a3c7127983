use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::utils::file::expand_path;

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SEED_EMPLOYEES,
    MAX_SEED_EMPLOYEES,
};

// =============================================================================
// File Config Structs (parsed from JSON, all optional)
// =============================================================================

/// Server configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Extra CORS origins (e.g. a UI served from another port)
    pub cors_origins: Option<Vec<String>>,
}

/// Seed configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SeedFileConfig {
    pub on_start: Option<bool>,
    pub employees: Option<usize>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    pub seed: Option<SeedFileConfig>,
    pub debug: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(server) = other.server {
            let current = self.server.get_or_insert_with(ServerFileConfig::default);
            if server.host.is_some() {
                tracing::trace!(host = ?server.host, "Merging server.host");
                current.host = server.host;
            }
            if server.port.is_some() {
                tracing::trace!(port = ?server.port, "Merging server.port");
                current.port = server.port;
            }
            if server.cors_origins.is_some() {
                tracing::trace!(cors_origins = ?server.cors_origins, "Merging server.cors_origins");
                current.cors_origins = server.cors_origins;
            }
        }

        if let Some(seed) = other.seed {
            let current = self.seed.get_or_insert_with(SeedFileConfig::default);
            if seed.on_start.is_some() {
                tracing::trace!(on_start = ?seed.on_start, "Merging seed.on_start");
                current.on_start = seed.on_start;
            }
            if seed.employees.is_some() {
                tracing::trace!(employees = ?seed.employees, "Merging seed.employees");
                current.employees = seed.employees;
            }
        }

        if other.debug.is_some() {
            tracing::trace!(debug = ?other.debug, "Merging debug");
            self.debug = other.debug;
        }
    }
}

// =============================================================================
// Runtime Config Structs (final merged configuration)
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

/// Seed configuration
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Seed an empty database at startup
    pub on_start: bool,
    /// Employees generated per seed
    pub employees: usize,
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub seed: SeedConfig,
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.staffdir/staffdir.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        let config = Self::from_layers(cli, file_config);
        config.validate()?;

        tracing::debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Layer CLI/env overrides on top of the merged file config and defaults
    fn from_layers(cli: &CliConfig, file_config: FileConfig) -> Self {
        let file_server = file_config.server.unwrap_or_default();
        let file_seed = file_config.seed.unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = cli.port.or(file_server.port).unwrap_or(DEFAULT_PORT);

        let seed = SeedConfig {
            on_start: cli.seed_on_start.or(file_seed.on_start).unwrap_or(false),
            employees: cli
                .seed_employees
                .or(file_seed.employees)
                .unwrap_or(DEFAULT_SEED_EMPLOYEES),
        };

        // --debug can only turn debug on
        let debug = cli.debug || file_config.debug.unwrap_or(false);

        Self {
            server: ServerConfig {
                host,
                port,
                cors_origins: file_server.cors_origins.unwrap_or_default(),
            },
            seed,
            debug,
        }
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("Configuration error: server.host must not be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("Configuration error: server.port must be greater than 0");
        }

        if self.seed.employees == 0 || self.seed.employees > MAX_SEED_EMPLOYEES {
            anyhow::bail!(
                "Configuration error: seed.employees must be between 1 and {}",
                MAX_SEED_EMPLOYEES
            );
        }

        Ok(())
    }
}

/// Get the profile config path (~/.staffdir/staffdir.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}

/// Check if host binds to all network interfaces
pub fn is_all_interfaces(host: &str) -> bool {
    matches!(host, "0.0.0.0" | "::" | "[::]")
}
