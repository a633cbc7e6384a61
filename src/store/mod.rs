//! Observable state container wiring the registry and the controller.

pub mod state;

pub use state::{StateHandle, StoreState, ViewStatus};

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::Config;
use crate::endpoint::EndpointRegistry;
use crate::storage::{FileStore, SessionStore};
use crate::submit::SubmissionController;

/// The one persisted state container behind the submission workflow.
///
/// Construction loads the endpoint collection from the session store and
/// forces the submission state to `Idle`, so a presentation layer always
/// starts from a clean view regardless of what a prior mount left behind.
#[derive(Debug, Clone)]
pub struct PfbStore {
    state: StateHandle,
    registry: EndpointRegistry,
    controller: SubmissionController,
}

impl PfbStore {
    /// Wire a store from an injected session store and HTTP client.
    pub fn new(session: Arc<dyn SessionStore>, http: reqwest::Client) -> Self {
        let state = StateHandle::new();
        let registry = EndpointRegistry::load(state.clone(), session);
        let controller = SubmissionController::new(state.clone(), http);
        controller.reset();
        Self {
            state,
            registry,
            controller,
        }
    }

    /// Wire a store from configuration: file-backed persistence under the
    /// configured root and a shared HTTP client.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let session = FileStore::open(&config.storage_path);
        // No overall request timeout: a submission waits on the node until
        // the transport itself gives up.
        let http = reqwest::Client::builder()
            .tcp_nodelay(true)
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self::new(Arc::new(session), http))
    }

    /// The endpoint registry.
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// The submission controller.
    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    /// Snapshot of the current store state.
    pub fn state(&self) -> StoreState {
        self.state.snapshot()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }
}
