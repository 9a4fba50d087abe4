//! Invoice and line-item records as the backend serves them.
//!
//! These are read-only snapshots from dockbill's point of view: the
//! backend owns persistence, we only classify and summarize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::meta;

/// Open key-value bag attached to a line item by upstream systems.
pub type MetaBag = serde_json::Map<String, serde_json::Value>;

/// One billable charge row on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub description: String,
    /// May be fractional (e.g. partial pallet-days).
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    /// Price per unit, in minor currency units (cents).
    pub rate_minor_units: i64,
    /// Stored line total; not recomputed from quantity * rate here.
    pub amount_minor_units: i64,
    pub occurred_at: NaiveDate,
    /// Raw category signal from upstream; may be empty or absent.
    #[serde(default)]
    pub usage_kind: Option<String>,
    #[serde(default)]
    pub metadata: MetaBag,
}

impl LineItem {
    /// First non-blank string under any of `keys` in the metadata bag.
    pub fn meta_str(&self, keys: &[&str]) -> Option<&str> {
        meta::get_str(&self.metadata, keys)
    }

    /// Usage-kind signal: the direct field when non-blank, else the
    /// metadata spellings.
    pub fn usage_kind_signal(&self) -> Option<&str> {
        self.usage_kind
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.meta_str(meta::USAGE_KIND_KEYS))
    }

    /// Service/global category signal from metadata, any spelling.
    pub fn category_signal(&self) -> Option<&str> {
        self.meta_str(meta::CATEGORY_KEYS)
    }

    pub fn type_label(&self) -> Option<&str> {
        self.meta_str(meta::TYPE_LABEL_KEYS)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.meta_str(meta::SERVICE_NAME_KEYS)
    }

    pub fn order_id(&self) -> Option<&str> {
        self.meta_str(meta::ORDER_ID_KEYS)
    }

    /// Concatenation of the usage-id and usage-id-text fields, for
    /// marker-substring checks.
    pub fn usage_id_blob(&self) -> String {
        let mut blob = String::new();
        if let Some(s) = self.meta_str(meta::USAGE_ID_KEYS) {
            blob.push_str(s);
        }
        if let Some(s) = self.meta_str(meta::USAGE_ID_TEXT_KEYS) {
            blob.push_str(s);
        }
        blob
    }
}

/// Invoice header fields, owned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub status: String,
    /// Billing period label, e.g. "2026-08".
    pub period: String,
    pub subtotal_minor_units: i64,
    pub tax_minor_units: i64,
    pub total_minor_units: i64,
    #[serde(default)]
    pub issued_at: Option<NaiveDate>,
    #[serde(default)]
    pub due_at: Option<NaiveDate>,
}

/// One fetch of an invoice plus its line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceSnapshot {
    pub invoice: Invoice,
    pub items: Vec<LineItem>,
}
