//! Client configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};
use crate::uri::IngestionUri;

/// Prefix of the environment variables read by [`ClientConfig::load`]
pub const ENV_PREFIX: &str = "INGEST";

/// Connection settings for the ingestion API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URI scheme, `https` unless talking to a local test server
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Ingestion API host name
    #[serde(default)]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix of every resource
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Per-request timeout applied by the HTTP transport
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_port() -> u16 {
    443
}

fn default_base_path() -> String {
    "/api/v3".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: String::new(),
            port: default_port(),
            base_path: default_base_path(),
            request_timeout_secs: default_request_timeout(),
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// Defaults for everything but the host
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Load configuration from `INGEST_*` environment variables
    pub fn load() -> SdkResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an optional file, overridden by `INGEST_*`
    /// environment variables
    pub fn load_from(path: Option<&Path>) -> SdkResult<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`ClientConfig::load_from`], but leaves validation to the caller
    /// so further overrides can be applied first
    pub fn read(path: Option<&Path>) -> SdkResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| SdkError::Config(e.to_string()))
    }

    pub fn validate(&self) -> SdkResult<()> {
        if self.host.trim().is_empty() {
            return Err(SdkError::Config("host must be set".to_string()));
        }
        if self.port == 0 {
            return Err(SdkError::Config("port must be non-zero".to_string()));
        }
        if !self.base_path.starts_with('/') {
            return Err(SdkError::Config(format!(
                "base path '{}' must start with '/'",
                self.base_path
            )));
        }
        Ok(())
    }

    /// Root URI every resource path is built from
    pub fn ingestion_base_uri(&self) -> SdkResult<IngestionUri> {
        self.validate()?;
        IngestionUri::new(&self.scheme, &self.host, self.port, &self.base_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("rest.example.com");
        assert_eq!(config.scheme, "https");
        assert_eq!(config.port, 443);
        assert_eq!(config.base_path, "/api/v3");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_ingestion_base_uri() {
        let uri = ClientConfig::new("rest.example.com")
            .ingestion_base_uri()
            .unwrap();
        assert_eq!(uri.to_string(), "https://rest.example.com:443/api/v3");
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        let err = ClientConfig::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "configuration error: host must be set");
    }

    #[test]
    fn test_validate_rejects_relative_base_path() {
        let config = ClientConfig {
            base_path: "api/v3".to_string(),
            ..ClientConfig::new("h")
        };
        assert!(config.validate().is_err());
        assert!(config.ingestion_base_uri().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "host = \"ingest.internal\"\nport = 8443\nrequest_timeout_secs = 5\naccess_token = \"abc\""
        )
        .unwrap();

        let config = ClientConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.host, "ingest.internal");
        assert_eq!(config.port, 8443);
        assert_eq!(config.scheme, "https");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_from_file_without_host_fails() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "port = 8443").unwrap();

        assert!(ClientConfig::load_from(Some(file.path())).is_err());
    }
}
