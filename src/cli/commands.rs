//! CLI commands and argument parsing

use crate::types::Method;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ActiveCampaign API CLI
#[derive(Parser, Debug)]
#[command(name = "activecampaign")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML) with HTTP settings and credentials
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Perform a single API request
    Request(RequestArgs),

    /// Fetch every page of a collection endpoint
    All(RequestArgs),

    /// Verify the configured credentials
    Check,
}

/// Arguments describing one API call
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// HTTP method
    pub method: Method,

    /// Endpoint path, e.g. /api/3/contacts
    pub endpoint: String,

    /// JSON body object
    #[arg(long)]
    pub body: Option<String>,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Response field holding the payload
    #[arg(long)]
    pub data_key: Option<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_command() {
        let cli = Cli::try_parse_from([
            "activecampaign",
            "--config",
            "ac.yaml",
            "all",
            "get",
            "/api/3/contacts",
            "-q",
            "status=1",
            "--data-key",
            "contacts",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("ac.yaml")));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::All(args) => {
                assert_eq!(args.method, Method::GET);
                assert_eq!(args.endpoint, "/api/3/contacts");
                assert_eq!(args.query, vec!["status=1".to_string()]);
                assert_eq!(args.data_key.as_deref(), Some("contacts"));
            }
            other => panic!("Expected All, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_method() {
        assert!(Cli::try_parse_from(["activecampaign", "request", "TRACE", "/x"]).is_err());
    }
}
