//! Shared store state and its observation mechanism.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use crate::endpoint::Endpoint;

/// Lifecycle stage of the current submission, shown to the user.
///
/// Exactly one status is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStatus {
    /// No submission in progress and no recorded outcome.
    #[default]
    Idle,
    /// A submission is in flight.
    Loading,
    /// The last submission failed; see [`StoreState::error_message`].
    Error,
    /// The last submission succeeded; see [`StoreState::result`].
    Success,
}

/// Full store state handed to subscribers on every mutation.
///
/// Invariants, upheld by routing all mutation through the registry and the
/// controller: `result` is `Some` only in [`ViewStatus::Success`], and
/// `error_message` is non-empty only in [`ViewStatus::Error`].
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    /// Current submission lifecycle stage.
    pub view_status: ViewStatus,
    /// Failure description for the last submission, empty outside `Error`.
    pub error_message: String,
    /// Parsed response body of the last accepted submission.
    pub result: Option<Value>,
    /// Ordered collection of user-added endpoints.
    pub endpoints: Vec<Endpoint>,
}

/// Handle on the shared state cell.
///
/// Every mutation is a single `send_modify` on the underlying watch channel,
/// so subscribers never observe a partially applied transition. When two
/// overlapping submissions race, whichever resolves last overwrites the
/// submission fields wholesale.
#[derive(Clone)]
pub struct StateHandle {
    tx: Arc<watch::Sender<StoreState>>,
}

impl std::fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateHandle")
            .field("state", &*self.tx.borrow())
            .finish()
    }
}

impl StateHandle {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.tx.subscribe()
    }

    pub(crate) fn update(&self, mutate: impl FnOnce(&mut StoreState)) {
        self.tx.send_modify(mutate);
    }
}
