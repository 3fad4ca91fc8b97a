//! Paginated API requests
//!
//! Repeats [`super::request`]-style calls with an advancing offset and
//! concatenates the pages. Any failure aborts the whole call; items gathered
//! from earlier pages are dropped with it.

use super::request::{send, ApiRequest};
use crate::context::ExecutionContext;
use crate::error::{Error, Result};
use crate::pagination::{NextPage, OffsetPaginator, PaginationState};
use crate::types::JsonValue;
use tracing::debug;

/// Fetch every page of a collection endpoint
pub async fn request_all_items<C>(ctx: &C, req: &ApiRequest) -> Result<Vec<JsonValue>>
where
    C: ExecutionContext + ?Sized,
{
    request_all_items_with(ctx, req, &OffsetPaginator::default()).await
}

/// Fetch every page using a specific paginator
pub async fn request_all_items_with<C>(
    ctx: &C,
    req: &ApiRequest,
    paginator: &OffsetPaginator,
) -> Result<Vec<JsonValue>>
where
    C: ExecutionContext + ?Sized,
{
    let mut query = req.query.clone().unwrap_or_default();
    paginator.initial_params(&mut query);

    let mut state = PaginationState::new();
    let mut items = Vec::new();

    loop {
        let response = send(ctx, req.method, &req.endpoint, &req.body, query.clone()).await?;

        let page = extract_page(&response, req.data_key.as_deref())?;
        let count = page.as_ref().map(Vec::len);
        if let Some(page) = page {
            items.extend(page);
        }

        debug!(
            "Page {}: {} items at offset {}",
            state.pages + 1,
            count.unwrap_or(0),
            state.offset
        );

        match paginator.process_response(&response, count, &mut state)? {
            NextPage::Continue { offset } => paginator.set_offset(&mut query, offset),
            NextPage::Done => break,
        }
    }

    Ok(items)
}

/// Pull the item array out of a page
///
/// `None` when the payload is absent or `null`.
fn extract_page(response: &JsonValue, data_key: Option<&str>) -> Result<Option<Vec<JsonValue>>> {
    let value = match data_key {
        None => Some(response),
        Some(key) => response.get(key),
    };

    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Array(items)) => Ok(Some(items.clone())),
        Some(other) => Err(Error::UnexpectedPayload {
            key: data_key.unwrap_or("<response>").to_string(),
            found: json_type(other).to_string(),
        }),
    }
}

fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
