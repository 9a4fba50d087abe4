//! dockbill-billing: line-item classification, sub-grouping, and
//! invoice breakdown aggregation.

pub mod aggregate;
pub mod csv_import;
pub mod replacement;
pub mod rules;
pub mod sublabel;

pub use aggregate::{Breakdown, SubGroup, breakdown, sub_groups};
pub use csv_import::parse_line_items_csv;
pub use replacement::is_replacement;
pub use rules::classify;
pub use sublabel::sub_label;
