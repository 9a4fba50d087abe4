//! Tolerant accessors over the untyped line-item metadata bag.
//!
//! Upstream systems disagree on key spelling (snake_case vs camelCase),
//! so every logical field is read by trying an ordered list of keys.
//! Keeping the lists here means schema drift is handled in one place.

use serde_json::Value;

use crate::item::MetaBag;

pub const USAGE_KIND_KEYS: &[&str] = &["usage_kind", "usageKind"];
pub const CATEGORY_KEYS: &[&str] = &[
    "category",
    "service_category",
    "global_category",
    "serviceCategory",
    "globalCategory",
];
pub const TYPE_LABEL_KEYS: &[&str] = &["type_label", "typeLabel"];
pub const SERVICE_NAME_KEYS: &[&str] = &["service_name", "serviceName"];
pub const ORDER_ID_KEYS: &[&str] = &["order_id", "orderId"];
pub const USAGE_ID_KEYS: &[&str] = &["usage_id", "usageId"];
pub const USAGE_ID_TEXT_KEYS: &[&str] = &["usage_id_text", "usageIdText"];

/// First non-blank string value found under any of `keys`, in order.
/// Non-string values and whitespace-only strings are skipped.
pub fn get_str<'a>(bag: &'a MetaBag, keys: &[&str]) -> Option<&'a str> {
    for key in keys {
        if let Some(Value::String(s)) = bag.get(*key) {
            if !s.trim().is_empty() {
                return Some(s.as_str());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(v: serde_json::Value) -> MetaBag {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_first_spelling_wins() {
        let m = bag(json!({"type_label": "Storage", "typeLabel": "Outbound"}));
        assert_eq!(get_str(&m, TYPE_LABEL_KEYS), Some("Storage"));
    }

    #[test]
    fn test_falls_through_to_camel_case() {
        let m = bag(json!({"typeLabel": "Outbound"}));
        assert_eq!(get_str(&m, TYPE_LABEL_KEYS), Some("Outbound"));
    }

    #[test]
    fn test_blank_and_non_string_values_skipped() {
        let m = bag(json!({"order_id": "   ", "orderId": 12345}));
        assert_eq!(get_str(&m, ORDER_ID_KEYS), None);
    }

    #[test]
    fn test_missing_keys_yield_none() {
        let m = bag(json!({}));
        assert_eq!(get_str(&m, CATEGORY_KEYS), None);
    }
}
