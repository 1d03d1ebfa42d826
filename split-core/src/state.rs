//! View state shared between the loader and the renderer.

use crate::types::{Friend, TransactionsSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
}

/// Friends list, the two aggregate totals, and the loading flag.
///
/// The list and totals only ever change together, from one summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    friends: Vec<Friend>,
    total_give: f64,
    total_take: f64,
    loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            friends: Vec::new(),
            total_give: 0.0,
            total_take: 0.0,
            loading: true,
        }
    }
}

impl DashboardState {
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn total_give(&self) -> f64 {
        self.total_give
    }

    pub fn total_take(&self) -> f64 {
        self.total_take
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else {
            Phase::Loaded
        }
    }

    /// Replaces the list and both totals from one response.
    pub fn apply_summary(&mut self, summary: TransactionsSummary) {
        self.friends = summary.friends;
        self.total_give = summary.total_give;
        self.total_take = summary.total_take;
    }

    /// Ends a fetch. The loading flag only clears when a user was present.
    pub fn finish_fetch(&mut self, user_present: bool) {
        if user_present {
            self.loading = false;
        }
    }
}
