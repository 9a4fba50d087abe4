//! Plain-text rendering of invoice breakdowns.

use dockbill_billing::Breakdown;
use dockbill_core::{CategoryKey, Invoice, format_minor};

pub fn print_invoice_header(invoice: &Invoice) {
    println!(
        "Invoice {} [{}] period {}",
        invoice.id, invoice.status, invoice.period
    );
    println!(
        "subtotal {}  tax {}  total {}\n",
        format_minor(invoice.subtotal_minor_units),
        format_minor(invoice.tax_minor_units),
        format_minor(invoice.total_minor_units)
    );
}

pub fn print_breakdown(b: &Breakdown) {
    println!("Category breakdown:");
    for key in CategoryKey::ALL {
        let total = b.totals.get(&key).copied().unwrap_or(0);
        let count = b.counts.get(&key).copied().unwrap_or(0);
        println!("  {:<12} {:>12}  ({} items)", key.label(), format_minor(total), count);
    }
    println!("  {:<12} {:>12}", "Sum", format_minor(b.total_minor_units()));

    let groups = b.outbound_sub_groups();
    if !groups.is_empty() {
        println!("\nOutbound / replacement groups:");
        for g in &groups {
            println!(
                "  {:<26} {:>12}  qty {:>9.1}  ({} items)",
                g.label,
                format_minor(g.total_amount_minor_units),
                g.total_quantity,
                g.items.len()
            );
        }
    }
}
