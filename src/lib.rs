// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # ActiveCampaign API client
//!
//! Credential-authenticated requests against the ActiveCampaign v3 API,
//! plus a helper that walks offset-paginated collections.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use activecampaign_api::api::{request_all_items, ApiRequest};
//! use activecampaign_api::config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> activecampaign_api::Result<()> {
//!     let ctx = ClientConfig::from_file("activecampaign.yaml")?.into_context()?;
//!
//!     let req = ApiRequest::get("/api/3/contacts").data_key("contacts");
//!     let contacts = request_all_items(&ctx, &req).await?;
//!     println!("{} contacts", contacts.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  api::request()            api::request_all_items()      │
//! └──────────────────────────────┬───────────────────────────┘
//!                                │ &dyn ExecutionContext
//! ┌──────────────┬───────────────┴──────┬────────────────────┐
//! │     Auth     │       Context        │     Pagination     │
//! ├──────────────┼──────────────────────┼────────────────────┤
//! │ Credentials  │ credential lookup    │ limit / offset     │
//! │ Api-Token    │ HttpClient (reqwest) │ meta.total         │
//! └──────────────┴──────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credentials and request authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Execution context passed to API calls
pub mod context;

/// Offset pagination
pub mod pagination;

/// Single and paginated API requests
pub mod api;

/// YAML client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{request, request_all_items, ApiRequest};
pub use context::{ApiContext, ExecutionContext};
pub use error::{Error, ErrorKind, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
