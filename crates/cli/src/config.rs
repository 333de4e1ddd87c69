//! Persisted CLI settings and client configuration resolution

use anyhow::{Context, Result};
use ingest_sdk::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings saved between invocations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Ingestion API host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read settings file")?;

        serde_json::from_str(&content).context("Failed to parse settings file")
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::settings_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content).context("Failed to write settings file")?;

        Ok(())
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        let home = dirs_next::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("ingest").join("config.json"))
    }
}

/// Values given on the command line (or through their environment variables)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub scheme: Option<String>,
    pub token: Option<String>,
}

/// Build the client configuration.
///
/// Precedence, lowest first: saved settings, configuration file and
/// `INGEST_*` environment, command-line flags.
pub fn resolve(
    config_file: Option<&Path>,
    settings: &Settings,
    overrides: Overrides,
) -> Result<ClientConfig> {
    let mut config =
        ClientConfig::read(config_file).context("Failed to load client configuration")?;

    if config.host.is_empty() {
        if let Some(host) = &settings.host {
            config.host = host.clone();
            if let Some(port) = settings.port {
                config.port = port;
            }
            if let Some(scheme) = &settings.scheme {
                config.scheme = scheme.clone();
            }
        }
    }

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(scheme) = overrides.scheme {
        config.scheme = scheme;
    }
    if overrides.token.is_some() {
        config.access_token = overrides.token;
    }

    config
        .validate()
        .context("No usable ingestion host; pass --host or run `ingest config set --host <host>`")?;
    Ok(config)
}
