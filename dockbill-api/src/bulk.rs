//! Bulk rate apply: set one unit rate across every item in a
//! sub-group.
//!
//! All per-item patches are fired concurrently and awaited together.
//! There is no rollback: a failed batch leaves the successful updates
//! in place (rate-set is idempotent, so re-running is safe). The
//! recalculate + reload step only runs after every update succeeded;
//! if that step fails the caller must treat the invoice totals as
//! stale even though the rates are applied.

use futures_util::future::join_all;
use thiserror::Error;

use dockbill_core::{InvoiceSnapshot, LineItem};

use crate::client::{ApiClient, ItemPatch};

#[derive(Debug, Error)]
pub enum BulkApplyError {
    /// One or more item updates failed. Already-applied updates stand.
    #[error("bulk rate update failed ({failed} of {total} items): {first_error}")]
    ItemUpdates {
        first_error: String,
        failed: usize,
        total: usize,
    },

    /// Every rate was applied, but recalculation or the snapshot
    /// reload failed afterwards. Totals on the last-seen invoice are
    /// stale.
    #[error("items updated but totals may be stale: {cause:#}")]
    StaleTotals {
        updated: usize,
        cause: anyhow::Error,
    },
}

#[derive(Debug)]
pub struct BulkApplyOutcome {
    pub updated: usize,
    /// Fresh snapshot fetched after the server-side recalculation.
    pub snapshot: InvoiceSnapshot,
}

/// Apply `new_rate_minor_units` to every target item, then
/// recalculate the invoice and reload it.
pub async fn apply_bulk_rate(
    client: &ApiClient,
    invoice_id: &str,
    target_items: &[LineItem],
    new_rate_minor_units: i64,
) -> Result<BulkApplyOutcome, BulkApplyError> {
    let patch = ItemPatch::rate(new_rate_minor_units);

    // Fire all, await all; no ordering guarantee between items.
    let updates = target_items
        .iter()
        .map(|item| client.patch_item(&item.id, &patch));
    let results = join_all(updates).await;

    let total = results.len();
    let failures: Vec<anyhow::Error> = results.into_iter().filter_map(Result::err).collect();
    if let Some(first) = failures.first() {
        return Err(BulkApplyError::ItemUpdates {
            first_error: format!("{first:#}"),
            failed: failures.len(),
            total,
        });
    }

    let refreshed = async {
        client.recalculate(invoice_id).await?;
        client.fetch_invoice(invoice_id).await
    }
    .await;

    match refreshed {
        Ok(snapshot) => Ok(BulkApplyOutcome {
            updated: total,
            snapshot,
        }),
        Err(cause) => Err(BulkApplyError::StaleTotals {
            updated: total,
            cause,
        }),
    }
}
