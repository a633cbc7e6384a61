//! Pay-for-Blob submission client.
//!
//! This library submits blob-carrying transactions ("Pay-for-Blob", PFB) to a
//! user-chosen node endpoint and maintains a personal, persisted list of named
//! endpoints to choose from. The endpoint itself is assumed to sign and
//! broadcast the transaction; this client only performs the raw HTTP call and
//! tracks its outcome.
//!
//! All state lives in one observable container ([`store::PfbStore`]) housing
//! two components:
//!
//! - [`endpoint::EndpointRegistry`]: the persisted, ordered endpoint collection
//! - [`submit::SubmissionController`]: the submission state machine and its
//!   single asynchronous HTTP operation
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`endpoint`]: Endpoint collection and registry operations
//! - [`storage`]: Session-scoped key-value persistence port
//! - [`store`]: Observable state container wiring the components together
//! - [`submit`]: Submission state machine and wire types

pub mod config;
pub mod endpoint;
pub mod error;
pub mod storage;
pub mod store;
pub mod submit;

pub use config::Config;
pub use error::{PfbError, Result};
pub use store::{PfbStore, StoreState, ViewStatus};
