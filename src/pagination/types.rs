//! Pagination types
//!
//! State tracked across pages and the decisions derived from each response.

use serde_json::Value;

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available starting at this offset
    Continue {
        /// Offset for the next request
        offset: u64,
    },
    /// No more pages
    Done,
}

/// Result of checking the stop condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopResult {
    /// Continue pagination
    Continue,
    /// Stop pagination
    Stop,
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Offset sent with the most recent request
    pub offset: u64,
    /// Items received so far
    pub items_received: u64,
    /// Pages fetched so far
    pub pages: u32,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a fetched page
    pub fn next_page(&mut self) {
        self.pages += 1;
    }

    /// Add to items received
    pub fn add_received(&mut self, count: u64) {
        self.items_received += count;
    }
}

/// Check the total-count stop condition against a response
///
/// Pagination continues only while the total at `path` exceeds
/// `items_received`. A missing or non-numeric total stops it.
pub fn check_total(body: &Value, path: &str, items_received: u64) -> StopResult {
    match extract_total(body, path) {
        Some(total) if total > items_received => StopResult::Continue,
        _ => StopResult::Stop,
    }
}

/// Read a total count at a dotted path; numbers and numeric strings qualify
pub fn extract_total(body: &Value, path: &str) -> Option<u64> {
    match extract_path(body, path)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(ceil_count)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(ceil_count),
        _ => None,
    }
}

/// Round a fractional count up; negative and non-finite values are no count
fn ceil_count(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.ceil() as u64)
}

/// Walk a dotted path (`meta.total`, optionally prefixed with `$.`)
pub fn extract_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}
