//! CLI runner - executes commands

use crate::api::{request, request_all_items, ApiRequest};
use crate::cli::commands::{Cli, Commands, OutputFormat, RequestArgs};
use crate::config::ClientConfig;
use crate::context::ApiContext;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use tracing::info;

/// Endpoint used to verify credentials
const CHECK_ENDPOINT: &str = "/api/3/users/me";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let ctx = self.load_context()?;

        match &self.cli.command {
            Commands::Request(args) => {
                let req = build_request(args)?;
                let response = request(&ctx, &req).await?;
                self.output(&response)
            }
            Commands::All(args) => {
                let req = build_request(args)?;
                let items = request_all_items(&ctx, &req).await?;
                info!("Fetched {} items from {}", items.len(), req.endpoint);
                self.output(&JsonValue::Array(items))
            }
            Commands::Check => {
                let req = ApiRequest::get(CHECK_ENDPOINT).data_key("user");
                let user = request(&ctx, &req).await?;
                self.output(&serde_json::json!({
                    "status": "ok",
                    "user": user
                }))
            }
        }
    }

    /// Load the context from the configured file, or an empty one
    fn load_context(&self) -> Result<ApiContext> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        config.into_context()
    }

    fn output(&self, value: &JsonValue) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Turn command-line arguments into an API request
pub fn build_request(args: &RequestArgs) -> Result<ApiRequest> {
    let mut req = ApiRequest::new(args.method, &args.endpoint);

    if let Some(body) = &args.body {
        match serde_json::from_str::<JsonValue>(body)? {
            JsonValue::Object(map) => req = req.body(map),
            _ => return Err(Error::config("--body must be a JSON object")),
        }
    }

    if !args.query.is_empty() {
        req.query = Some(parse_query(&args.query)?);
    }

    if let Some(key) = &args.data_key {
        req = req.data_key(key);
    }

    Ok(req)
}

fn parse_query(pairs: &[String]) -> Result<JsonObject> {
    let mut query = JsonObject::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            Error::config(format!(
                "Invalid query parameter '{pair}', expected KEY=VALUE"
            ))
        })?;
        query.insert(key.to_string(), JsonValue::String(value.to_string()));
    }
    Ok(query)
}
