//! Reduces a classified item list into per-category totals, counts,
//! and display groupings. Recomputed from scratch on every snapshot;
//! nothing here is persisted.

use std::collections::HashMap;

use dockbill_core::{CategoryKey, LineItem};

use crate::rules::classify;
use crate::sublabel::{self, sub_label};

/// Per-category view of an invoice's line items. All 8 category keys
/// are always present, zero-initialized, so display code never has to
/// special-case missing buckets.
#[derive(Debug, Clone)]
pub struct Breakdown {
    /// Summed `amount_minor_units` per category.
    pub totals: HashMap<CategoryKey, i64>,
    /// Item count per category.
    pub counts: HashMap<CategoryKey, usize>,
    /// Partition of the items by category, insertion order preserved.
    pub groups: HashMap<CategoryKey, Vec<LineItem>>,
}

impl Breakdown {
    /// Sum over all category totals. Equals the sum of the input
    /// items' amounts: every item lands in exactly one bucket.
    pub fn total_minor_units(&self) -> i64 {
        self.totals.values().sum()
    }

    /// Sub-groups over the outbound and replacement buckets, in the
    /// preferred display order.
    pub fn outbound_sub_groups(&self) -> Vec<SubGroup> {
        let mut items: Vec<LineItem> = Vec::new();
        for key in [CategoryKey::Outbound, CategoryKey::Replacement] {
            if let Some(group) = self.groups.get(&key) {
                items.extend(group.iter().cloned());
            }
        }
        sub_groups(&items)
    }
}

/// One display sub-group of outbound/replacement items.
#[derive(Debug, Clone)]
pub struct SubGroup {
    pub label: String,
    pub items: Vec<LineItem>,
    pub total_amount_minor_units: i64,
    pub total_quantity: f64,
}

/// Classify and aggregate a full item list.
pub fn breakdown(items: &[LineItem]) -> Breakdown {
    let mut totals = HashMap::new();
    let mut counts = HashMap::new();
    let mut groups: HashMap<CategoryKey, Vec<LineItem>> = HashMap::new();
    for key in CategoryKey::ALL {
        totals.insert(key, 0i64);
        counts.insert(key, 0usize);
        groups.insert(key, Vec::new());
    }

    for item in items {
        let key = classify(item);
        *totals.entry(key).or_insert(0) += item.amount_minor_units;
        *counts.entry(key).or_insert(0) += 1;
        groups.entry(key).or_default().push(item.clone());
    }

    Breakdown {
        totals,
        counts,
        groups,
    }
}

/// Partition outbound/replacement items by sub-label, ordered by the
/// preferred label list with stragglers alphabetical after it.
pub fn sub_groups(items: &[LineItem]) -> Vec<SubGroup> {
    let mut by_label: HashMap<&'static str, SubGroup> = HashMap::new();

    for item in items {
        let label = sub_label(item);
        let group = by_label.entry(label).or_insert_with(|| SubGroup {
            label: label.to_string(),
            items: Vec::new(),
            total_amount_minor_units: 0,
            total_quantity: 0.0,
        });
        group.items.push(item.clone());
        group.total_amount_minor_units += item.amount_minor_units;
        group.total_quantity += item.quantity;
    }

    let mut ordered: Vec<SubGroup> = by_label.into_values().collect();
    ordered.sort_by(|a, b| {
        preferred_rank(&a.label)
            .cmp(&preferred_rank(&b.label))
            .then_with(|| a.label.cmp(&b.label))
    });
    ordered
}

fn preferred_rank(label: &str) -> usize {
    sublabel::PREFERRED_ORDER
        .iter()
        .position(|preferred| *preferred == label)
        .unwrap_or(sublabel::PREFERRED_ORDER.len())
}
