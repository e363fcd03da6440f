//! Ledger sink backed by the Google Sheets `values:append` endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use libreta_core::{LedgerSink, LedgerTarget, SinkError};

use crate::config::SheetsConfig;
use crate::google::auth::GoogleAuth;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub struct SheetsLedger {
    auth: Arc<GoogleAuth>,
    http: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsLedger {
    pub fn new(auth: Arc<GoogleAuth>, config: SheetsConfig) -> Self {
        Self {
            auth,
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// (spreadsheet id, tab) for a ledger target.
fn location(config: &SheetsConfig, target: LedgerTarget) -> (&str, &str) {
    match target {
        LedgerTarget::Personal => (&config.expenses_spreadsheet_id, &config.personal_tab),
        LedgerTarget::Partnership => (&config.expenses_spreadsheet_id, &config.partnership_tab),
        LedgerTarget::Restricted => (&config.expenses_spreadsheet_id, &config.restricted_tab),
        LedgerTarget::Rentals => (&config.rentals_spreadsheet_id, &config.rentals_tab),
    }
}

#[async_trait]
impl LedgerSink for SheetsLedger {
    async fn append(&self, target: LedgerTarget, row: Vec<String>) -> Result<(), SinkError> {
        let token = self
            .auth
            .token()
            .await
            .map_err(|e| SinkError::Auth(e.to_string()))?;
        let (spreadsheet_id, tab) = location(&self.config, target);
        let url = format!(
            "{}/{}/values/{}:append?valueInputOption=RAW",
            SHEETS_API_BASE,
            spreadsheet_id,
            tab.replace(' ', "%20"),
        );
        let res = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(SinkError::Upstream(format!("append: {status} {body}")));
        }
        Ok(())
    }
}
