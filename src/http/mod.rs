//! HTTP client module
//!
//! Provides the reqwest-backed transport and the transport-neutral
//! [`RequestOptions`] that describes one outbound call.
//!
//! # Features
//!
//! - **JSON in, JSON out**: bodies are serialized as JSON and responses parsed
//! - **Status errors**: non-2xx responses keep their status code and body
//! - **Nested query encoding**: bracket notation for objects and arrays

mod client;
mod query;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestOptions};
pub use query::encode_query;

#[cfg(test)]
mod tests;
