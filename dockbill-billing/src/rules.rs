//! Category classification for heterogeneous billing line items.
//!
//! Items arrive from several upstream systems with inconsistent
//! vocabulary, so classification is a layered fallback:
//! raw signal exact match > type label exact match > type label
//! substrings > description substrings > extra.
//!
//! Both match passes are ordered rule tables evaluated top-to-bottom,
//! first match wins; adding vocabulary is a data edit.

use dockbill_core::{CategoryKey, LineItem};

use crate::replacement::is_replacement;

/// Known raw tokens, matched exactly after lowercasing.
const EXACT_RULES: &[(&[&str], CategoryKey)] = &[
    (
        &["storage", "storage_fee", "pallet_storage", "bin_storage"],
        CategoryKey::Storage,
    ),
    (
        &[
            "crossdock",
            "cross_dock",
            "cross-dock",
            "drayage",
            "unloading",
            "container_unloading",
        ],
        CategoryKey::Unloading,
    ),
    (
        &["inbound", "receiving", "barcode", "barcoding", "scanning"],
        CategoryKey::Inbound,
    ),
    (
        &[
            "outbound",
            "outbound_ecom",
            "outbound_fulfillment",
            "ecommerce",
            "ecom",
            "shipping",
            "parcel",
            "fulfillment",
            "labeling",
            "wrapping",
        ],
        CategoryKey::Outbound,
    ),
    (
        &["return", "returns", "returns_processing", "return_processing"],
        CategoryKey::Return,
    ),
    (&["insurance", "cargo_insurance"], CategoryKey::Insurance),
    (
        &[
            "extra", "extras", "supplies", "packaging", "boxes", "mailer", "mailers", "pallet",
            "pallets",
        ],
        CategoryKey::Extra,
    ),
];

/// Substring heuristics for free-form labels and descriptions.
/// Priority order matters: storage before unloading before inbound
/// before the outbound family.
const SUBSTRING_RULES: &[(&[&str], CategoryKey)] = &[
    (&["storage"], CategoryKey::Storage),
    (
        &["drayage", "cross-dock", "crossdock", "cross dock", "unload"],
        CategoryKey::Unloading,
    ),
    (&["inbound", "barcode", "scan"], CategoryKey::Inbound),
    (
        &[
            "outbound",
            "ecom",
            "shipping",
            "parcel",
            "fulfillment",
            "labeling",
            "wrapping",
        ],
        CategoryKey::Outbound,
    ),
    (&["return"], CategoryKey::Return),
    (&["insurance"], CategoryKey::Insurance),
];

/// Classify one line item into exactly one category. Total function:
/// anything unrecognized lands in `Extra`, never an error.
pub fn classify(item: &LineItem) -> CategoryKey {
    let signal = raw_signal(item);
    if let Some(category) = exact_match(&signal) {
        return resolve_outbound(category, item);
    }

    let type_label = item.type_label().unwrap_or("").to_lowercase();
    if let Some(category) = exact_match(&type_label) {
        return resolve_outbound(category, item);
    }

    if let Some(category) = substring_match(&type_label) {
        return resolve_outbound(category, item);
    }

    let description = item.description.to_lowercase();
    if let Some(category) = substring_match(&description) {
        return resolve_outbound(category, item);
    }

    CategoryKey::Extra
}

/// Structured category signal: usage kind (field, then metadata
/// spellings), then the service/global category metadata, lowercased.
fn raw_signal(item: &LineItem) -> String {
    item.usage_kind_signal()
        .or_else(|| item.category_signal())
        .unwrap_or("")
        .to_lowercase()
}

fn exact_match(token: &str) -> Option<CategoryKey> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    EXACT_RULES
        .iter()
        .find(|(tokens, _)| tokens.contains(&token))
        .map(|(_, category)| *category)
}

fn substring_match(text: &str) -> Option<CategoryKey> {
    if text.trim().is_empty() {
        return None;
    }
    SUBSTRING_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| text.contains(needle)))
        .map(|(_, category)| *category)
}

/// Outbound-like hits get a second look: replacement shipments bill
/// under their own bucket.
fn resolve_outbound(category: CategoryKey, item: &LineItem) -> CategoryKey {
    if category == CategoryKey::Outbound && is_replacement(item) {
        CategoryKey::Replacement
    } else {
        category
    }
}
