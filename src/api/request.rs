//! Single authenticated API request
//!
//! Resolves credentials, builds the outbound request, and normalizes the
//! two failure shapes the API produces: a 403 for rejected credentials and
//! a `success: false` envelope for everything it refuses in-band.

use crate::auth::Authenticator;
use crate::context::ExecutionContext;
use crate::error::{Error, Result};
use crate::http::RequestOptions;
use crate::types::{JsonObject, JsonValue, Method};
use tracing::{debug, warn};

/// Name the API credentials are stored under
pub const CREDENTIALS_NAME: &str = "activeCampaignApi";

/// One API call as described by the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path appended to the credential base URL, e.g. `/api/3/contacts`
    pub endpoint: String,
    /// JSON body; omitted from the request when empty
    pub body: JsonObject,
    /// Query parameters
    pub query: Option<JsonObject>,
    /// Field of the response holding the payload
    pub data_key: Option<String>,
}

impl ApiRequest {
    /// Create a request for a method and endpoint
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Create a GET request
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// Create a POST request
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// Set the body object
    #[must_use]
    pub fn body(mut self, body: JsonObject) -> Self {
        self.body = body;
        self
    }

    /// Set one body field
    #[must_use]
    pub fn body_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.query
            .get_or_insert_with(JsonObject::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the payload field name
    #[must_use]
    pub fn data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }
}

/// Perform one API request
///
/// Returns the whole response, or the value under `data_key` when one is
/// set (`null` if the response lacks it).
pub async fn request<C>(ctx: &C, req: &ApiRequest) -> Result<JsonValue>
where
    C: ExecutionContext + ?Sized,
{
    let query = req.query.clone().unwrap_or_default();
    let response = send(ctx, req.method, &req.endpoint, &req.body, query).await?;

    Ok(match &req.data_key {
        None => response,
        Some(key) => response.get(key).cloned().unwrap_or(JsonValue::Null),
    })
}

/// Resolve credentials, send, and normalize the outcome
pub(crate) async fn send<C>(
    ctx: &C,
    method: Method,
    endpoint: &str,
    body: &JsonObject,
    query: JsonObject,
) -> Result<JsonValue>
where
    C: ExecutionContext + ?Sized,
{
    let credentials = ctx
        .credentials(CREDENTIALS_NAME)
        .ok_or_else(|| Error::missing_credentials(CREDENTIALS_NAME))?;

    let mut options = RequestOptions::new(method, credentials.url_for(endpoint));
    options.query = query;
    if !body.is_empty() {
        options.body = Some(JsonValue::Object(body.clone()));
    }
    let options = Authenticator::new(credentials.auth_config()).apply(options);

    debug!("{} {}", method, endpoint);
    let response = ctx.request(options).await.map_err(|e| {
        if e.is_forbidden() {
            warn!("Credentials rejected for {} {}", method, endpoint);
            Error::invalid_credentials(e)
        } else {
            e
        }
    })?;

    check_envelope(&response)?;
    Ok(response)
}

/// Fail on a `success: false` envelope
fn check_envelope(response: &JsonValue) -> Result<()> {
    if response.get("success") == Some(&JsonValue::Bool(false)) {
        return Err(Error::api(
            display_field(response.get("error")),
            display_field(response.get("error_info")),
        ));
    }
    Ok(())
}

/// Render a server-supplied field for an error message
fn display_field(value: Option<&JsonValue>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
