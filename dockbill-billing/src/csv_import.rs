//! Parse line-item CSV exports for offline classification.
//!
//! Expected columns:
//! id,occurred_at,description,quantity,unit,rate_minor_units,
//! amount_minor_units,usage_kind,metadata
//!
//! The metadata column, when present, is a JSON object. Rows with an
//! unparseable date are skipped rather than failing the whole file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use dockbill_core::{LineItem, MetaBag};

pub fn parse_line_items_csv(path: impl AsRef<Path>) -> Result<Vec<LineItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut items = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let id = record.get(0).unwrap_or("").trim();
        // Skip blank rows and the header row
        if id.is_empty() || id.eq_ignore_ascii_case("id") {
            continue;
        }

        let date_str = record.get(1).unwrap_or("").trim();
        let occurred_at = match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => continue, // skip unparseable rows
        };

        let quantity: f64 = record.get(3).unwrap_or("0").trim().parse().unwrap_or(0.0);
        let unit = record
            .get(4)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let rate_minor_units: i64 = record.get(5).unwrap_or("0").trim().parse().unwrap_or(0);
        let amount_minor_units: i64 = record.get(6).unwrap_or("0").trim().parse().unwrap_or(0);
        let usage_kind = record
            .get(7)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        items.push(LineItem {
            id: id.to_string(),
            description: record.get(2).unwrap_or("").trim().to_string(),
            quantity,
            unit,
            rate_minor_units,
            amount_minor_units,
            occurred_at,
            usage_kind,
            metadata: parse_metadata(record.get(8).unwrap_or("")),
        });
    }

    Ok(items)
}

fn parse_metadata(raw: &str) -> MetaBag {
    let raw = raw.trim();
    if raw.is_empty() {
        return MetaBag::new();
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(bag)) => bag,
        _ => MetaBag::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dockbill-csv-test-{}-{:?}.csv",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parses_rows_and_metadata() {
        let path = write_temp(concat!(
            "id,occurred_at,description,quantity,unit,rate_minor_units,amount_minor_units,usage_kind,metadata\n",
            "li-1,2026-08-01,Storage fee,2,pallet,250,500,storage,\n",
            "li-2,2026-08-02,Outbound ecom,1,,200,200,outbound,\"{\"\"orderId\"\":\"\"REPLACEMENT\"\"}\"\n",
        ));
        let items = parse_line_items_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unit.as_deref(), Some("pallet"));
        assert_eq!(items[0].amount_minor_units, 500);
        assert_eq!(items[1].order_id(), Some("REPLACEMENT"));
    }

    #[test]
    fn test_skips_bad_dates_and_blank_rows() {
        let path = write_temp(concat!(
            "id,occurred_at,description,quantity,unit,rate_minor_units,amount_minor_units,usage_kind,metadata\n",
            "li-1,not-a-date,Storage fee,1,,100,100,storage,\n",
            ",,,,,,,,\n",
            "li-2,2026-08-03,Misc charge,1,,75,75,,\n",
        ));
        let items = parse_line_items_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "li-2");
        assert_eq!(items[0].usage_kind, None);
    }

    #[test]
    fn test_malformed_metadata_becomes_empty_bag() {
        let path = write_temp(concat!(
            "id,occurred_at,description,quantity,unit,rate_minor_units,amount_minor_units,usage_kind,metadata\n",
            "li-1,2026-08-01,Storage fee,1,,100,100,storage,not-json\n",
        ));
        let items = parse_line_items_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(items[0].metadata.is_empty());
    }
}
