//! Detects merchandise replacements hiding inside outbound-looking
//! line items. Upstream marks these three different ways depending on
//! which system created the charge.

use dockbill_core::LineItem;

const MARKER: &str = "REPLACEMENT";

/// True when an outbound-looking item is actually a replacement
/// shipment. First hit wins:
/// 1. order id equals the marker exactly,
/// 2. usage-id fields contain the marker,
/// 3. type label + description contain the marker.
pub fn is_replacement(item: &LineItem) -> bool {
    if let Some(order_id) = item.order_id() {
        if order_id.trim().to_uppercase() == MARKER {
            return true;
        }
    }

    if item.usage_id_blob().to_uppercase().contains(MARKER) {
        return true;
    }

    let mut labels = item.type_label().unwrap_or("").to_string();
    labels.push_str(&item.description);
    labels.to_uppercase().contains(MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn item(description: &str, meta: serde_json::Value) -> LineItem {
        LineItem {
            id: "li-1".to_string(),
            description: description.to_string(),
            quantity: 1.0,
            unit: None,
            rate_minor_units: 100,
            amount_minor_units: 100,
            occurred_at: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            usage_kind: None,
            metadata: match meta {
                serde_json::Value::Object(m) => m,
                _ => panic!("expected object"),
            },
        }
    }

    #[test]
    fn test_order_id_marker() {
        assert!(is_replacement(&item("Outbound parcel", json!({"orderId": "REPLACEMENT"}))));
        assert!(is_replacement(&item("Outbound parcel", json!({"order_id": "replacement"}))));
    }

    #[test]
    fn test_order_id_must_match_exactly() {
        assert!(!is_replacement(&item(
            "Outbound parcel",
            json!({"orderId": "REPLACEMENT-123"})
        )));
    }

    #[test]
    fn test_usage_id_substring() {
        assert!(is_replacement(&item(
            "Outbound parcel",
            json!({"usageIdText": "ord-77/replacement/unit-2"})
        )));
    }

    #[test]
    fn test_label_and_description_substring() {
        assert!(is_replacement(&item("Replacement shipment to buyer", json!({}))));
        assert!(is_replacement(&item(
            "Outbound",
            json!({"typeLabel": "Ecom replacement"})
        )));
    }

    #[test]
    fn test_plain_outbound_is_not_replacement() {
        assert!(!is_replacement(&item(
            "Outbound parcel",
            json!({"orderId": "A-1009", "usageId": "u-5"})
        )));
    }
}
