//! PFB transaction input and wire request types.

use serde::{Deserialize, Serialize};

/// Fixed gas limit attached to every submission.
pub const GAS_LIMIT: u64 = 80_000;

/// Fixed fee attached to every submission.
pub const FEE: u64 = 2_000;

/// A Pay-for-Blob transaction as supplied by the caller.
///
/// Both fields are opaque strings; the remote node is responsible for any
/// format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PfbTx {
    /// Identifier tagging the destination namespace of the blob.
    pub namespace_id: String,
    /// Blob payload, e.g. a hex-encoded message.
    pub data: String,
}

/// Wire body POSTed to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPfbRequest {
    /// Namespace identifier, verbatim from the transaction.
    pub namespace_id: String,
    /// Blob payload, verbatim from the transaction.
    pub data: String,
    /// Always [`GAS_LIMIT`], never derived from input.
    pub gas_limit: u64,
    /// Always [`FEE`], never derived from input.
    pub fee: u64,
}

impl SubmitPfbRequest {
    /// Build the wire body for `tx` with the fixed gas and fee constants.
    pub fn from_tx(tx: &PfbTx) -> Self {
        Self {
            namespace_id: tx.namespace_id.clone(),
            data: tx.data.clone(),
            gas_limit: GAS_LIMIT,
            fee: FEE,
        }
    }
}
