//! Execution context
//!
//! Everything the API functions need from their host: credential lookup and
//! a way to perform one HTTP request. The context is always passed
//! explicitly.

use crate::auth::{CredentialStore, Credentials, StaticCredentials};
use crate::error::Result;
use crate::http::{HttpClient, RequestOptions};
use crate::types::JsonValue;
use async_trait::async_trait;

/// Host capabilities consumed by [`crate::api::request`] and
/// [`crate::api::request_all_items`]
#[async_trait]
pub trait ExecutionContext: Send + Sync {
    /// Look up credentials by name
    fn credentials(&self, name: &str) -> Option<Credentials>;

    /// Perform one HTTP request and return the parsed JSON body
    async fn request(&self, options: RequestOptions) -> Result<JsonValue>;
}

/// Context pairing a credential store with a reqwest-backed client
#[derive(Debug, Clone)]
pub struct ApiContext<S = StaticCredentials> {
    credentials: S,
    client: HttpClient,
}

impl<S: CredentialStore> ApiContext<S> {
    /// Create a context from a store and a client
    pub fn new(credentials: S, client: HttpClient) -> Self {
        Self {
            credentials,
            client,
        }
    }

    /// Get the HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Get the credential store
    pub fn store(&self) -> &S {
        &self.credentials
    }
}

#[async_trait]
impl<S: CredentialStore> ExecutionContext for ApiContext<S> {
    fn credentials(&self, name: &str) -> Option<Credentials> {
        self.credentials.get(name)
    }

    async fn request(&self, options: RequestOptions) -> Result<JsonValue> {
        self.client.send(options).await
    }
}
