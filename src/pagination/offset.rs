//! Offset pagination
//!
//! Requests pages with `limit`/`offset` query parameters and stops once the
//! server-reported total has been received.

use super::types::{check_total, extract_total, NextPage, PaginationState, StopResult};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use tracing::{debug, warn};

/// Page size requested from the API
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Path of the total item count in a response envelope
pub const DEFAULT_TOTAL_PATH: &str = "meta.total";

/// Offset-based pagination
///
/// `?offset=200&limit=100`, terminated by a total count in the response.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Query parameter name for offset
    pub offset_param: String,
    /// Query parameter name for limit
    pub limit_param: String,
    /// Number of records per page
    pub limit_value: u64,
    /// Dotted path to the total count
    pub total_path: String,
}

impl Default for OffsetPaginator {
    fn default() -> Self {
        Self {
            offset_param: "offset".to_string(),
            limit_param: "limit".to_string(),
            limit_value: DEFAULT_PAGE_SIZE,
            total_path: DEFAULT_TOTAL_PATH.to_string(),
        }
    }
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(
        offset_param: impl Into<String>,
        limit_param: impl Into<String>,
        limit_value: u64,
        total_path: impl Into<String>,
    ) -> Self {
        Self {
            offset_param: offset_param.into(),
            limit_param: limit_param.into(),
            limit_value,
            total_path: total_path.into(),
        }
    }

    /// Write the first page's limit and offset into `query`
    ///
    /// Caller-supplied values for either parameter are overwritten.
    pub fn initial_params(&self, query: &mut JsonObject) {
        for (param, value) in [
            (&self.limit_param, self.limit_value),
            (&self.offset_param, 0),
        ] {
            if let Some(previous) = query.insert(param.clone(), JsonValue::from(value)) {
                if previous != JsonValue::from(value) {
                    debug!("Overriding caller-supplied '{param}={previous}' with {value}");
                }
            }
        }
    }

    /// Point `query` at the given offset
    pub fn set_offset(&self, query: &mut JsonObject, offset: u64) {
        query.insert(self.offset_param.clone(), JsonValue::from(offset));
    }

    /// Record a fetched page and decide whether another one is needed
    ///
    /// `records_count` is `None` when the page carried no item array.
    pub fn process_response(
        &self,
        body: &JsonValue,
        records_count: Option<usize>,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.next_page();
        if let Some(count) = records_count {
            state.add_received(count as u64);
        }

        if check_total(body, &self.total_path, state.items_received) == StopResult::Stop {
            return Ok(NextPage::Done);
        }

        // A page that added nothing would re-request the same offset forever.
        if records_count.unwrap_or(0) == 0 {
            let total = extract_total(body, &self.total_path).unwrap_or_default();
            warn!(
                "Pagination stalled after {} pages: {} of {} items received",
                state.pages, state.items_received, total
            );
            return Err(Error::PaginationStalled {
                offset: state.items_received,
                total,
            });
        }

        state.offset = state.items_received;
        Ok(NextPage::Continue {
            offset: state.offset,
        })
    }
}
