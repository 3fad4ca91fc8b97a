//! ActiveCampaign API calls
//!
//! - [`request`] performs one authenticated call
//! - [`request_all_items`] pages through a collection endpoint
//!
//! Both take the [`ExecutionContext`](crate::context::ExecutionContext)
//! explicitly.

mod paginate;
mod request;

pub use paginate::{request_all_items, request_all_items_with};
pub use request::{request, ApiRequest, CREDENTIALS_NAME};
