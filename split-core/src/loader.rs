//! Data loader: fetches the summary on mount and on user change.

use crate::client::TransactionsClient;
use crate::state::DashboardState;
use crate::types::{CurrentUser, SplitError, TransactionsSummary};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;

type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Owns the dashboard's view state and the requests that fill it.
///
/// Requests run as tokio tasks, so `mount` and `set_user` must be called
/// from inside a runtime. Only the most recent request may write state.
pub struct Dashboard {
    client: Arc<TransactionsClient>,
    state: Arc<Mutex<DashboardState>>,
    user: Option<CurrentUser>,
    generation: Arc<AtomicU64>,
    notifier: Option<Notifier>,
}

impl Dashboard {
    pub fn new(client: TransactionsClient) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(DashboardState::default())),
            user: None,
            generation: Arc::new(AtomicU64::new(0)),
            notifier: None,
        }
    }

    /// Called after every completed fetch, e.g. to request a repaint.
    pub fn with_notifier<F>(mut self, notify: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.notifier = Some(Arc::new(notify));
        self
    }

    /// Issues the initial fetch for `user`.
    pub fn mount(&mut self, user: Option<CurrentUser>) -> JoinHandle<()> {
        self.user = user;
        self.load()
    }

    /// Refetches when the user's identity changed. Returns `None` otherwise.
    pub fn set_user(&mut self, user: Option<CurrentUser>) -> Option<JoinHandle<()>> {
        let unchanged = match (&self.user, &user) {
            (Some(current), Some(next)) => current.same_identity(next),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return None;
        }

        self.user = user;
        Some(self.load())
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Copy of the current view state for rendering.
    pub fn snapshot(&self) -> DashboardState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn load(&self) -> JoinHandle<()> {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        let client = self.client.clone();
        let state = self.state.clone();
        let notifier = self.notifier.clone();
        let user_present = self.user.is_some();

        log::debug!("Fetching transactions summary #{} from {}", id, client.url());

        tokio::spawn(async move {
            let outcome = client.fetch_summary().await;
            let latest = generation.load(Ordering::SeqCst) == id;
            settle(&state, id, latest, outcome, user_present);

            if let Some(notify) = notifier {
                notify();
            }
        })
    }
}

/// Records the outcome of request `id`. A superseded request still ends
/// loading but never writes its data.
fn settle(
    state: &Mutex<DashboardState>,
    id: u64,
    latest: bool,
    outcome: Result<TransactionsSummary, SplitError>,
    user_present: bool,
) {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    match outcome {
        Ok(_) if !latest => {
            log::debug!("Dropping superseded transactions response #{}", id);
        }
        Ok(summary) => {
            log::debug!(
                "Transactions summary #{} loaded with {} friends",
                id,
                summary.friends.len()
            );
            state.apply_summary(summary);
        }
        Err(e) => log::error!("Failed to fetch friends: {}", e),
    }
    state.finish_fetch(user_present);
}
