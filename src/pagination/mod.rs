//! Pagination module
//!
//! Offset/limit paging terminated by a server-reported total.
//!
//! # Overview
//!
//! The [`OffsetPaginator`] seeds the query with `limit`/`offset`, then after
//! each page advances the offset to the number of items received so far.
//! Paging ends once `meta.total` is missing or no longer exceeds that count.

mod offset;
mod types;

pub use offset::{OffsetPaginator, DEFAULT_PAGE_SIZE, DEFAULT_TOTAL_PATH};
pub use types::{check_total, extract_path, extract_total, NextPage, PaginationState, StopResult};

#[cfg(test)]
mod tests;
