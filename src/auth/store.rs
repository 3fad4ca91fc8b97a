//! Credential lookup
//!
//! Credentials are resolved by name at call time. Where they come from is
//! up to the implementor; [`StaticCredentials`] keeps them in memory.

use super::types::Credentials;
use std::collections::HashMap;

/// Source of named credentials
pub trait CredentialStore: Send + Sync {
    /// Look up credentials by name
    fn get(&self, name: &str) -> Option<Credentials>;
}

/// In-memory credential store
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    entries: HashMap<String, Credentials>,
}

impl StaticCredentials {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add credentials under a name
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, credentials: Credentials) -> Self {
        self.insert(name, credentials);
        self
    }

    /// Insert or replace credentials under a name
    pub fn insert(&mut self, name: impl Into<String>, credentials: Credentials) {
        self.entries.insert(name.into(), credentials);
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, Credentials>> for StaticCredentials {
    fn from(entries: HashMap<String, Credentials>) -> Self {
        Self { entries }
    }
}

impl CredentialStore for StaticCredentials {
    fn get(&self, name: &str) -> Option<Credentials> {
        self.entries.get(name).cloned()
    }
}
