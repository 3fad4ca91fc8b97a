//! CLI module
//!
//! Command-line interface over the API functions.
//!
//! # Commands
//!
//! - `request` - Perform one API request
//! - `all` - Fetch every page of a collection endpoint
//! - `check` - Verify the configured credentials

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, RequestArgs};
pub use runner::{build_request, Runner};
