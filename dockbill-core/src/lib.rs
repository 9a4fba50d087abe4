//! dockbill-core: shared types for 3PL invoice billing

pub mod category;
pub mod item;
pub mod meta;
pub mod money;

pub use category::CategoryKey;
pub use item::{Invoice, InvoiceSnapshot, LineItem, MetaBag};
pub use money::{format_minor, parse_rate};
