//! Display sub-grouping for outbound and replacement items.

use dockbill_core::LineItem;

pub const ECOM: &str = "E-commerce Transaction";
pub const FULFILLMENT: &str = "Fulfillment Units";
pub const STANDARD_LABELING: &str = "Standard Labeling";
pub const WRAPPING: &str = "Wrapping";
pub const RETAIL_FBA: &str = "Retail Transaction (FBA)";
pub const OTHER: &str = "Other";

/// Preferred iteration order for sub-group display. Labels outside
/// this list sort after it, alphabetically.
pub const PREFERRED_ORDER: &[&str] = &[ECOM, FULFILLMENT, RETAIL_FBA, STANDARD_LABELING, WRAPPING];

/// Sub-group label for an outbound/replacement item. Total function;
/// unrecognized services land in "Other". Matches on the first
/// non-empty of type label, service name, description.
pub fn sub_label(item: &LineItem) -> &'static str {
    let text = item
        .type_label()
        .or_else(|| item.service_name())
        .unwrap_or(&item.description)
        .to_lowercase();

    if text.contains("outbound_ecom") || text.contains("outbound-ecom") || text.contains("outbound ecom")
    {
        return ECOM;
    }
    if text.contains("outbound_fulfillment")
        || text.contains("outbound-fulfillment")
        || text.contains("fulfillment unit")
    {
        return FULFILLMENT;
    }
    if text.contains("standard labeling") || (text.contains("labeling") && !text.contains("barcode"))
    {
        return STANDARD_LABELING;
    }
    if text.contains("wrapping") {
        return WRAPPING;
    }
    if text.contains("retail transaction") {
        return RETAIL_FBA;
    }
    OTHER
}
