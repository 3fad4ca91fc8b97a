//! Authenticator implementation
//!
//! Applies authentication to outbound request options.

use super::types::{AuthConfig, Location};
use crate::http::RequestOptions;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to request options
    pub fn apply(&self, options: RequestOptions) -> RequestOptions {
        match &self.config {
            AuthConfig::None => options,

            AuthConfig::ApiKey {
                location,
                header_name,
                query_param,
                prefix,
                value,
            } => {
                let val = format!("{}{}", prefix.as_deref().unwrap_or(""), value);
                match location {
                    Location::Header => {
                        let header = header_name.as_deref().unwrap_or("Authorization");
                        options.header(header, val)
                    }
                    Location::Query => {
                        let param = query_param.as_deref().unwrap_or("api_key");
                        options.query(param, val)
                    }
                }
            }
        }
    }
}
