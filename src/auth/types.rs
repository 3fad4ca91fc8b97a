//! Auth configuration types
//!
//! Credentials as they are stored, and the runtime auth configuration
//! derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Header the ActiveCampaign API reads the key from
pub const API_TOKEN_HEADER: &str = "Api-Token";

/// Stored API credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// API key
    #[serde(alias = "api_key")]
    pub api_key: String,
    /// Account base URL, e.g. `https://account.api-us1.com`
    #[serde(alias = "api_url")]
    pub api_url: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// Auth configuration placing the key in the `Api-Token` header
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::ApiKey {
            location: Location::Header,
            header_name: Some(API_TOKEN_HEADER.to_string()),
            query_param: None,
            prefix: None,
            value: self.api_key.clone(),
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Location for API key placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Place in HTTP header
    #[default]
    Header,
    /// Place in query parameter
    Query,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// API Key authentication (header or query)
    ApiKey {
        /// Where to place the API key
        location: Location,
        /// Header name (for header location)
        header_name: Option<String>,
        /// Query parameter name (for query location)
        query_param: Option<String>,
        /// Prefix to add before the value (e.g., "Bearer ")
        prefix: Option<String>,
        /// The API key value
        value: String,
    },
}
