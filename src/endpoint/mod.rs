//! Endpoint collection and registry operations.
//!
//! This module handles:
//! - The endpoint data type and its persisted document form
//! - The registry owning the ordered, persisted endpoint collection

pub mod registry;
pub mod types;

pub use registry::EndpointRegistry;
pub use types::Endpoint;
