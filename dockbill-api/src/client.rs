//! HTTP client for the invoice backend.
//!
//! The backend owns all persistence; this client only fetches
//! snapshots and submits mutations. Non-2xx responses surface the
//! backend's message text.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dockbill_core::InvoiceSnapshot;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

/// Partial update for one line item. Unset fields are left untouched
/// by the backend; the line amount is recomputed server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_minor_units: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<NaiveDate>,
}

impl ItemPatch {
    pub fn rate(rate_minor_units: i64) -> Self {
        ItemPatch {
            rate_minor_units: Some(rate_minor_units),
            ..ItemPatch::default()
        }
    }
}

/// Request to add a service charge row to an invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceItem {
    pub invoice_id: String,
    pub service_id: String,
    pub quantity: f64,
    pub rate_minor_units: i64,
    pub occurred_at: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Fetch the invoice header plus its full line-item list.
    pub async fn fetch_invoice(&self, invoice_id: &str) -> Result<InvoiceSnapshot> {
        let resp = self
            .with_auth(self.http.get(self.url(&format!("/invoices/{invoice_id}"))))
            .send()
            .await
            .context("fetch invoice")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("fetch invoice {invoice_id}: {status} {txt}");
        }

        resp.json().await.context("parse invoice snapshot")
    }

    /// Apply a partial update to one line item.
    pub async fn patch_item(&self, item_id: &str, patch: &ItemPatch) -> Result<()> {
        let resp = self
            .with_auth(self.http.patch(self.url(&format!("/line-items/{item_id}"))))
            .json(patch)
            .send()
            .await
            .with_context(|| format!("patch line item {item_id}"))?;

        self.check_mutation(resp, &format!("patch line item {item_id}"))
            .await
    }

    pub async fn delete_item(&self, item_id: &str) -> Result<()> {
        let resp = self
            .with_auth(self.http.delete(self.url(&format!("/line-items/{item_id}"))))
            .send()
            .await
            .with_context(|| format!("delete line item {item_id}"))?;

        self.check_mutation(resp, &format!("delete line item {item_id}"))
            .await
    }

    pub async fn add_service_item(&self, request: &AddServiceItem) -> Result<()> {
        let resp = self
            .with_auth(self.http.post(self.url("/line-items")))
            .json(request)
            .send()
            .await
            .context("add service line item")?;

        self.check_mutation(resp, "add service line item").await
    }

    /// Recompute subtotal/tax/total server-side.
    pub async fn recalculate(&self, invoice_id: &str) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Req<'a> {
            invoice_id: &'a str,
        }

        let resp = self
            .with_auth(self.http.post(self.url("/invoices/recalculate")))
            .json(&Req { invoice_id })
            .send()
            .await
            .with_context(|| format!("recalculate invoice {invoice_id}"))?;

        self.check_mutation(resp, &format!("recalculate invoice {invoice_id}"))
            .await
    }

    /// Transition the invoice to issued.
    pub async fn issue_invoice(&self, invoice_id: &str) -> Result<()> {
        let resp = self
            .with_auth(
                self.http
                    .post(self.url(&format!("/invoices/{invoice_id}/issue"))),
            )
            .send()
            .await
            .with_context(|| format!("issue invoice {invoice_id}"))?;

        self.check_mutation(resp, &format!("issue invoice {invoice_id}"))
            .await
    }

    /// Mint a shareable link for the invoice.
    pub async fn share_link(&self, invoice_id: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct Resp {
            url: String,
        }

        let resp = self
            .with_auth(
                self.http
                    .post(self.url(&format!("/invoices/{invoice_id}/share"))),
            )
            .send()
            .await
            .with_context(|| format!("share invoice {invoice_id}"))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("share invoice {invoice_id}: {status} {txt}");
        }

        let out: Resp = resp.json().await.context("parse share link response")?;
        Ok(out.url)
    }

    async fn check_mutation(&self, resp: reqwest::Response, what: &str) -> Result<()> {
        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("{what}: {status} {txt}");
        }

        // Some endpoints report failure in-body with a 200.
        let body: MutationResponse = resp.json().await.with_context(|| format!("{what}: parse response"))?;
        if !body.success {
            bail!("{what}: {}", body.message.unwrap_or_else(|| "backend reported failure".to_string()));
        }
        Ok(())
    }
}
