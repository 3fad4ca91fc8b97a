//! Client configuration
//!
//! A YAML document holding HTTP settings and named credentials:
//!
//! ```yaml
//! http:
//!   timeout_seconds: 30
//! credentials:
//!   activeCampaignApi:
//!     apiKey: "..."
//!     apiUrl: "https://account.api-us1.com"
//! ```

use crate::auth::{Credentials, StaticCredentials};
use crate::context::ApiContext;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Complete client configuration loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Credentials by name
    #[serde(default)]
    pub credentials: HashMap<String, Credentials>,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl From<&HttpConfig> for HttpClientConfig {
    fn from(config: &HttpConfig) -> Self {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}

impl ClientConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check that every credential entry is usable
    pub fn validate(&self) -> Result<()> {
        for (name, creds) in &self.credentials {
            if creds.api_key.trim().is_empty() {
                return Err(Error::config(format!("Credentials '{name}' have an empty apiKey")));
            }
            url::Url::parse(&creds.api_url).map_err(|e| {
                Error::config(format!("Credentials '{name}' have an invalid apiUrl: {e}"))
            })?;
        }
        Ok(())
    }

    /// Build an execution context from this configuration
    pub fn into_context(self) -> Result<ApiContext<StaticCredentials>> {
        let client = HttpClient::with_config(HttpClientConfig::from(&self.http))?;
        Ok(ApiContext::new(
            StaticCredentials::from(self.credentials),
            client,
        ))
    }
}
