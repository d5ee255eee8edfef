//! Connection configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ElasticError, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "9200";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

pub const HOST_ENV: &str = "ELASTICSEARCH_HOST";
pub const PORT_ENV: &str = "ELASTICSEARCH_PORT";
pub const TIMEOUT_ENV: &str = "ELASTICSEARCH_TIMEOUT_SECS";

/// Where the engine lives and how long to wait for it.
///
/// `host` may carry a scheme (`https://search.internal`); when it does not,
/// requests go out over plain `http`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub host: String,
    pub port: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

/// On-disk shape of a configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<PortValue>,
    timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
}

/// Ports show up both as `9200` and `"9200"` in hand-written files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

impl From<PortValue> for String {
    fn from(value: PortValue) -> Self {
        match value {
            PortValue::Number(n) => n.to_string(),
            PortValue::Text(s) => s,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig
    pub fn new<H: Into<String>, P: Into<String>>(host: H, port: P) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Set the host
    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port
    pub fn with_port<S: Into<String>>(mut self, port: S) -> Self {
        self.port = port.into();
        self
    }

    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Build a configuration from `ELASTICSEARCH_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var(HOST_ENV) {
            config.host = host;
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            config.port = port;
        }
        if let Ok(secs) = std::env::var(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ElasticError::config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {secs:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Read a JSON configuration file and merge it over the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let file: FileConfig = serde_json::from_str(&raw).map_err(|e| {
            ElasticError::config(format!(
                "invalid config file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        let mut config = Self::default();
        if let Some(host) = file.host {
            config.host = host;
        }
        if let Some(port) = file.port {
            config.port = port.into();
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// `host:port`, exactly as configured
    pub fn base_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve a path below the base URL into a full request URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url();
        let base = if base.contains("://") {
            base
        } else {
            format!("http://{base}")
        };

        let url = Url::parse(&format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))?;
        Ok(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}
