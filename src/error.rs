//! Error types for the ActiveCampaign client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Message surfaced when the API rejects the stored credentials
pub const INVALID_CREDENTIALS_MESSAGE: &str = "The ActiveCampaign credentials are not valid!";

/// The main error type for the ActiveCampaign client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No credentials got returned for '{name}'")]
    MissingCredentials { name: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("{message}")]
    Auth {
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("ActiveCampaign error response: {error} ({error_info})")]
    Api { error: String, error_info: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Expected an array of items at '{key}', found {found}")]
    UnexpectedPayload { key: String, found: String },

    #[error("Pagination stalled at offset {offset} with {total} items reported")]
    PaginationStalled { offset: u64, total: u64 },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Setup problem on the caller's side (missing credentials, bad config)
    Configuration,
    /// The remote rejected the credentials
    Auth,
    /// The remote answered with a structured failure payload
    Api,
    /// Any other failure of the underlying HTTP exchange
    Transport,
    /// A response that could not be interpreted
    Data,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing credentials error
    pub fn missing_credentials(name: impl Into<String>) -> Self {
        Self::MissingCredentials { name: name.into() }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            source: None,
        }
    }

    /// Rewrite a rejected request into the fixed invalid-credentials error
    pub fn invalid_credentials(source: Error) -> Self {
        Self::Auth {
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an API error from the server-supplied fields
    pub fn api(error: impl Into<String>, error_info: impl Into<String>) -> Self {
        Self::Api {
            error: error.into(),
            error_info: error_info.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. }
            | Error::MissingCredentials { .. }
            | Error::YamlParse(_) => ErrorKind::Configuration,
            Error::Auth { .. } => ErrorKind::Auth,
            Error::Api { .. } => ErrorKind::Api,
            Error::Http(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_) => {
                ErrorKind::Transport
            }
            Error::JsonParse(_)
            | Error::UnexpectedPayload { .. }
            | Error::PaginationStalled { .. } => ErrorKind::Data,
        }
    }

    /// HTTP status code carried by a transport failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the remote refused access (HTTP 403)
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

/// Result type alias for the ActiveCampaign client
pub type Result<T> = std::result::Result<T, Error>;
