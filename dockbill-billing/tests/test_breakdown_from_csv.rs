use dockbill_billing::{breakdown, classify, parse_line_items_csv};
use dockbill_core::CategoryKey;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("line_items.csv")
}

/// Fixture regression: a month of mixed 3PL charges buckets the way
/// the billing screen expects.
#[test]
fn test_full_breakdown_from_fixture() {
    let items = parse_line_items_csv(fixture_path()).unwrap();
    assert_eq!(items.len(), 17);

    let b = breakdown(&items);

    assert_eq!(b.totals[&CategoryKey::Storage], 5300);
    assert_eq!(b.totals[&CategoryKey::Unloading], 38000);
    assert_eq!(b.totals[&CategoryKey::Inbound], 4500);
    assert_eq!(b.totals[&CategoryKey::Outbound], 40850);
    assert_eq!(b.totals[&CategoryKey::Replacement], 810);
    assert_eq!(b.totals[&CategoryKey::Return], 1330);
    assert_eq!(b.totals[&CategoryKey::Insurance], 2200);
    assert_eq!(b.totals[&CategoryKey::Extra], 3850);

    assert_eq!(b.counts[&CategoryKey::Outbound], 5);
    assert_eq!(b.counts[&CategoryKey::Replacement], 2);
    assert_eq!(b.counts[&CategoryKey::Extra], 2);
}

/// Sum invariant over real-shaped data: no drops, no double counts.
#[test]
fn test_sum_invariant_from_fixture() {
    let items = parse_line_items_csv(fixture_path()).unwrap();
    let b = breakdown(&items);
    let input_sum: i64 = items.iter().map(|i| i.amount_minor_units).sum();
    assert_eq!(b.total_minor_units(), input_sum);
    assert_eq!(input_sum, 96840);
}

/// Every fixture item classifies into one of the eight keys, and
/// classification is stable across repeated calls.
#[test]
fn test_total_coverage_and_idempotence() {
    let items = parse_line_items_csv(fixture_path()).unwrap();
    for item in &items {
        let first = classify(item);
        assert!(CategoryKey::ALL.contains(&first));
        assert_eq!(first, classify(item));
    }
}

/// Outbound + replacement items group into the preferred display
/// order, with "Other" last.
#[test]
fn test_sub_group_display_order_from_fixture() {
    let items = parse_line_items_csv(fixture_path()).unwrap();
    let b = breakdown(&items);
    let groups = b.outbound_sub_groups();

    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "E-commerce Transaction",
            "Fulfillment Units",
            "Retail Transaction (FBA)",
            "Standard Labeling",
            "Wrapping",
            "Other",
        ]
    );

    // Replacement ecom item folds into the e-commerce group.
    assert_eq!(groups[0].total_amount_minor_units, 11760);
    assert_eq!(groups[0].total_quantity, 98.0);
    assert_eq!(groups[5].items.len(), 1);
    assert_eq!(groups[5].items[0].id, "li-013");
}
