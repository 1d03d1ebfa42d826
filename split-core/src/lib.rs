//! UI-agnostic client library for the split dashboard.
//!
//! Fetches the current user's balance summary from the split backend, keeps it
//! in shared view state, and derives the display values a frontend renders.
//! Uses `reqwest` for HTTP and `serde` for the wire format.

mod client;
mod config;
mod loader;
mod route;
mod state;
mod types;
pub mod view;

#[cfg(test)]
mod test_server;

pub use client::{TransactionsClient, TRANSACTIONS_PATH};
pub use config::{Config, BACKEND_URL_VAR, SESSION_COOKIE_VAR, USERNAME_VAR};
pub use loader::Dashboard;
pub use route::Route;
pub use state::{DashboardState, Phase};
pub use types::{CurrentUser, Friend, SplitError, TransactionsSummary};
