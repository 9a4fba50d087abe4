use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dockbill_api::{AddServiceItem, ApiClient, BulkApplyError, apply_bulk_rate};
use dockbill_billing::{breakdown, parse_line_items_csv};
use dockbill_core::parse_rate;

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "dockbill", version, about = "3PL invoice billing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Invoice operations against the billing backend
    Invoice {
        #[command(subcommand)]
        command: InvoiceCommand,
    },

    /// Line-item operations
    Item {
        #[command(subcommand)]
        command: ItemCommand,
    },

    /// Classify a line-item CSV export offline (no backend needed)
    Classify {
        /// Path to a line-item CSV export
        #[arg(long)]
        csv: PathBuf,
    },

    /// Config management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum InvoiceCommand {
    /// Fetch an invoice and print its category breakdown
    Show { id: String },

    /// Apply one unit rate to every item in an outbound sub-group
    BulkRate {
        id: String,

        /// Sub-group label, e.g. "Wrapping" or "Fulfillment Units"
        #[arg(long)]
        group: String,

        /// New unit rate as a decimal, e.g. 0.30
        #[arg(long)]
        rate: String,
    },

    /// Recompute subtotal/tax/total server-side
    Recalc { id: String },

    /// Transition the invoice to issued
    Issue { id: String },

    /// Print a shareable invoice link
    Share { id: String },
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    /// Delete one line item
    Rm { id: String },

    /// Add a service charge row to an invoice
    Add {
        #[arg(long)]
        invoice: String,

        #[arg(long)]
        service: String,

        #[arg(long, default_value_t = 1.0)]
        quantity: f64,

        /// Unit rate as a decimal, e.g. 0.30
        #[arg(long)]
        rate: String,

        /// Charge date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.dockbill/config.toml
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Invoice { command } => match command {
            InvoiceCommand::Show { id } => {
                let snapshot = client()?.fetch_invoice(&id).await?;
                render::print_invoice_header(&snapshot.invoice);
                render::print_breakdown(&breakdown(&snapshot.items));
            }

            InvoiceCommand::BulkRate { id, group, rate } => {
                bulk_rate(&id, &group, &rate).await?;
            }

            InvoiceCommand::Recalc { id } => {
                client()?.recalculate(&id).await?;
                println!("Recalculated invoice {id}");
            }

            InvoiceCommand::Issue { id } => {
                client()?.issue_invoice(&id).await?;
                println!("Issued invoice {id}");
            }

            InvoiceCommand::Share { id } => {
                let url = client()?.share_link(&id).await?;
                println!("{url}");
            }
        },

        Command::Item { command } => match command {
            ItemCommand::Rm { id } => {
                client()?.delete_item(&id).await?;
                println!("Deleted line item {id}");
            }

            ItemCommand::Add {
                invoice,
                service,
                quantity,
                rate,
                date,
            } => {
                let rate_minor_units = parse_rate(&rate)?;
                let occurred_at = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                    .with_context(|| format!("invalid date: {date} (expected YYYY-MM-DD)"))?;
                client()?
                    .add_service_item(&AddServiceItem {
                        invoice_id: invoice.clone(),
                        service_id: service,
                        quantity,
                        rate_minor_units,
                        occurred_at,
                    })
                    .await?;
                println!("Added line item to invoice {invoice}");
            }
        },

        Command::Classify { csv } => {
            if !csv.exists() {
                bail!("CSV not found: {}", csv.display());
            }
            let items = parse_line_items_csv(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;
            println!("Parsed {} line items from {}\n", items.len(), csv.display());
            render::print_breakdown(&breakdown(&items));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config()?;
            }
        },
    }

    Ok(())
}

fn client() -> Result<ApiClient> {
    let cfg = config::load_config()?;
    Ok(ApiClient::new(cfg.backend.base_url, cfg.backend.api_token))
}

async fn bulk_rate(invoice_id: &str, group_label: &str, rate: &str) -> Result<()> {
    // Validate before anything touches the network.
    let rate_minor_units = parse_rate(rate)?;

    let client = client()?;
    let snapshot = client.fetch_invoice(invoice_id).await?;
    let b = breakdown(&snapshot.items);
    let groups = b.outbound_sub_groups();

    let Some(target) = groups.iter().find(|g| g.label.eq_ignore_ascii_case(group_label)) else {
        let available: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        bail!(
            "no sub-group {group_label:?} on invoice {invoice_id} (available: {})",
            available.join(", ")
        );
    };

    println!(
        "Applying rate {} to {} items in {:?}...",
        rate,
        target.items.len(),
        target.label
    );

    match apply_bulk_rate(&client, invoice_id, &target.items, rate_minor_units).await {
        Ok(outcome) => {
            println!("Updated {} items.\n", outcome.updated);
            render::print_invoice_header(&outcome.snapshot.invoice);
            render::print_breakdown(&breakdown(&outcome.snapshot.items));
            Ok(())
        }

        Err(err @ BulkApplyError::ItemUpdates { .. }) => {
            println!("Successfully updated items keep the new rate; no rollback was attempted.");
            Err(err.into())
        }

        Err(BulkApplyError::StaleTotals { updated, cause }) => {
            println!("Updated {updated} items, but recalculation/reload failed.");
            println!("Invoice totals may be stale; run: dockbill invoice recalc {invoice_id}");
            Err(cause.context("recalculation/reload after bulk rate apply"))
        }
    }
}
