//! Endpoint data types.

use serde::{Deserialize, Serialize};

/// A named HTTP URL to which a PFB submission is sent.
///
/// Neither field is unique across the collection: two endpoints may share a
/// name or a url, and both copies are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// User-chosen display name.
    pub name: String,
    /// Submission URL, e.g. `https://<node>:26659/submit_pfb`.
    pub url: String,
}

/// Document form persisted under the session store key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct PersistedEndpoints {
    pub endpoints: Vec<Endpoint>,
}
