//! dockbill-api: client for the invoice backend and the bulk
//! rate-apply flow built on top of it.

pub mod bulk;
pub mod client;

pub use bulk::{BulkApplyError, BulkApplyOutcome, apply_bulk_rate};
pub use client::{AddServiceItem, ApiClient, ItemPatch};
