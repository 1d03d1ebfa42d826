//! Data types and error definitions for balance summaries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A counterparty with a running balance against the current user.
///
/// `total_amount` is signed: negative means the current user owes this friend,
/// zero or positive means the friend owes the current user.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    pub total_amount: f64,
}

impl Friend {
    /// Profile picture URL, treating an empty string as missing.
    pub fn picture(&self) -> Option<&str> {
        self.profile_picture
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// Body of `GET /api/v1/transactions`.
///
/// All three fields are required; a body missing any of them is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsSummary {
    pub friends: Vec<Friend>,
    pub total_give: f64,
    pub total_take: f64,
}

/// The signed-in user, as supplied by the session environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

impl CurrentUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Whether both values refer to the same identity.
    pub fn same_identity(&self, other: &CurrentUser) -> bool {
        self.username == other.username
    }
}

/// Errors that can occur while configuring or fetching the summary.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch transactions: server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed transactions response: {0}")]
    Decode(#[from] serde_json::Error),
}
