//! HTTP access to the split backend's transactions summary.

use crate::config::Config;
use crate::types::{SplitError, TransactionsSummary};
use reqwest::header::{self, HeaderMap, HeaderValue};

pub const TRANSACTIONS_PATH: &str = "/api/v1/transactions";

/// Fetches the balance summary for the session's user.
///
/// Session credentials travel as cookies: the store keeps whatever the backend
/// sets, and a configured session cookie is sent on every request.
#[derive(Debug, Clone)]
pub struct TransactionsClient {
    http: reqwest::Client,
    url: String,
}

impl TransactionsClient {
    pub fn new(config: &Config) -> Result<Self, SplitError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(cookie).map_err(|e| {
                SplitError::InvalidConfig(format!("session cookie is not a valid header: {e}"))
            })?;
            headers.insert(header::COOKIE, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            url: config.transactions_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET of the summary. Non-2xx statuses and undecodable bodies are errors.
    pub async fn fetch_summary(&self) -> Result<TransactionsSummary, SplitError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SplitError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
