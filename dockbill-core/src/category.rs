//! The eight fixed billing buckets every line item lands in.

use serde::{Deserialize, Serialize};

/// Billing category for a line item. Every item classifies into
/// exactly one of these; `Extra` is the catch-all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    #[serde(rename = "unloading")]
    Unloading,
    #[serde(rename = "inbound")]
    Inbound,
    #[serde(rename = "storage")]
    Storage,
    #[serde(rename = "outbound")]
    Outbound,
    #[serde(rename = "replacement")]
    Replacement,
    #[serde(rename = "return")]
    Return,
    #[serde(rename = "insurance")]
    Insurance,
    #[serde(rename = "extra")]
    Extra,
}

impl CategoryKey {
    /// All categories in display order.
    pub const ALL: [CategoryKey; 8] = [
        CategoryKey::Unloading,
        CategoryKey::Inbound,
        CategoryKey::Storage,
        CategoryKey::Outbound,
        CategoryKey::Replacement,
        CategoryKey::Return,
        CategoryKey::Insurance,
        CategoryKey::Extra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Unloading => "unloading",
            CategoryKey::Inbound => "inbound",
            CategoryKey::Storage => "storage",
            CategoryKey::Outbound => "outbound",
            CategoryKey::Replacement => "replacement",
            CategoryKey::Return => "return",
            CategoryKey::Insurance => "insurance",
            CategoryKey::Extra => "extra",
        }
    }

    /// Human-facing heading for breakdown output.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Unloading => "Unloading",
            CategoryKey::Inbound => "Inbound",
            CategoryKey::Storage => "Storage",
            CategoryKey::Outbound => "Outbound",
            CategoryKey::Replacement => "Replacement",
            CategoryKey::Return => "Return",
            CategoryKey::Insurance => "Insurance",
            CategoryKey::Extra => "Extras",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_no_duplicates() {
        for (i, a) in CategoryKey::ALL.iter().enumerate() {
            for b in &CategoryKey::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_renames_are_lowercase() {
        for key in CategoryKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
