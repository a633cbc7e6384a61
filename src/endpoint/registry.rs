//! Registry owning the persisted endpoint collection.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::{SessionStore, ENDPOINTS_STORAGE_KEY};
use crate::store::state::StateHandle;

use super::types::{Endpoint, PersistedEndpoints};

/// Owner of the ordered, persisted collection of user-added endpoints.
///
/// The collection is loaded once at construction and written back on every
/// mutation. Mutations never fail: a persistence failure is logged and the
/// in-memory collection stays authoritative for the rest of the session.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    state: StateHandle,
    store: Arc<dyn SessionStore>,
}

impl EndpointRegistry {
    /// Create the registry and seed the shared state with the persisted
    /// collection. Missing or corrupt persisted data degrades to an empty
    /// collection.
    pub fn load(state: StateHandle, store: Arc<dyn SessionStore>) -> Self {
        let registry = Self { state, store };
        let endpoints = registry.read_persisted();
        debug!(count = endpoints.len(), "loaded persisted endpoints");
        registry.state.update(|s| s.endpoints = endpoints);
        registry
    }

    /// Append `endpoint` to the collection. No deduplication by name or url.
    pub fn add(&self, endpoint: Endpoint) {
        debug!(name = %endpoint.name, url = %endpoint.url, "adding endpoint");
        self.state.update(|s| s.endpoints.push(endpoint));
        self.persist();
    }

    /// Remove every endpoint whose url exactly equals `url`. Removing an
    /// absent url is a no-op.
    pub fn remove(&self, url: &str) {
        debug!(%url, "removing endpoints");
        self.state.update(|s| s.endpoints.retain(|e| e.url != url));
        self.persist();
    }

    /// Snapshot of the current collection, in insertion order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.state.snapshot().endpoints
    }

    fn read_persisted(&self) -> Vec<Endpoint> {
        match self.store.get(ENDPOINTS_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<PersistedEndpoints>(&raw) {
                Ok(document) => document.endpoints,
                Err(err) => {
                    warn!(%err, "persisted endpoint document is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "failed to read persisted endpoints, starting empty");
                Vec::new()
            }
        }
    }

    fn persist(&self) {
        let document = PersistedEndpoints {
            endpoints: self.endpoints(),
        };
        let raw = match serde_json::to_string(&document) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "failed to serialize endpoint collection");
                return;
            }
        };
        if let Err(err) = self.store.set(ENDPOINTS_STORAGE_KEY, &raw) {
            warn!(%err, "failed to persist endpoint collection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn endpoint(name: &str, url: &str) -> Endpoint {
        Endpoint {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    fn fresh_registry() -> EndpointRegistry {
        EndpointRegistry::load(StateHandle::new(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn add_appends_in_order() {
        let registry = fresh_registry();

        registry.add(endpoint("A", "http://x"));
        registry.add(endpoint("B", "http://y"));

        assert_eq!(
            registry.endpoints(),
            vec![endpoint("A", "http://x"), endpoint("B", "http://y")]
        );
    }

    #[test]
    fn add_never_deduplicates() {
        let registry = fresh_registry();

        registry.add(endpoint("A", "http://x"));
        registry.add(endpoint("A", "http://x"));

        let endpoints = registry.endpoints();
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[0], endpoints[1]);
    }

    #[test]
    fn remove_deletes_every_match_and_nothing_else() {
        let registry = fresh_registry();
        registry.add(endpoint("A", "http://x"));
        registry.add(endpoint("B", "http://y"));
        registry.add(endpoint("C", "http://x"));

        registry.remove("http://x");

        assert_eq!(registry.endpoints(), vec![endpoint("B", "http://y")]);
    }

    #[test]
    fn remove_absent_url_is_a_noop() {
        let registry = fresh_registry();
        registry.add(endpoint("A", "http://x"));

        registry.remove("http://nope");

        assert_eq!(registry.endpoints(), vec![endpoint("A", "http://x")]);
    }

    #[test]
    fn add_then_remove_round_trips_to_empty() {
        let registry = fresh_registry();

        registry.add(endpoint("A", "http://x"));
        assert_eq!(registry.endpoints(), vec![endpoint("A", "http://x")]);

        registry.remove("http://x");
        assert!(registry.endpoints().is_empty());
    }

    #[test]
    fn collection_survives_a_reload_from_the_same_store() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());

        let first = EndpointRegistry::load(StateHandle::new(), store.clone());
        first.add(endpoint("A", "http://x"));
        first.add(endpoint("B", "http://y"));

        let second = EndpointRegistry::load(StateHandle::new(), store);
        assert_eq!(
            second.endpoints(),
            vec![endpoint("A", "http://x"), endpoint("B", "http://y")]
        );
    }

    #[test]
    fn corrupt_persisted_document_starts_empty() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        store.set(ENDPOINTS_STORAGE_KEY, "not json").unwrap();

        let registry = EndpointRegistry::load(StateHandle::new(), store);
        assert!(registry.endpoints().is_empty());

        // The registry must stay usable after degrading.
        registry.add(endpoint("A", "http://x"));
        assert_eq!(registry.endpoints().len(), 1);
    }

    #[test]
    fn persisted_document_uses_the_fixed_key_and_shape() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let registry = EndpointRegistry::load(StateHandle::new(), store.clone());

        registry.add(endpoint("A", "http://x"));

        let raw = store.get(ENDPOINTS_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"endpoints":[{"name":"A","url":"http://x"}]}"#);
    }
}
