//! Authentication module
//!
//! Credentials are looked up by name through a [`CredentialStore`] and
//! turned into an [`AuthConfig`] that the [`Authenticator`] applies to
//! each outbound request.

mod authenticator;
mod store;
mod types;

pub use authenticator::Authenticator;
pub use store::{CredentialStore, StaticCredentials};
pub use types::{AuthConfig, Credentials, Location, API_TOKEN_HEADER};
