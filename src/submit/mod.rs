//! Submission state machine and wire types.
//!
//! This module handles:
//! - The PFB transaction input and its wire request form
//! - The controller driving the single asynchronous submission

pub mod controller;
pub mod types;

pub use controller::SubmissionController;
pub use types::{PfbTx, SubmitPfbRequest, FEE, GAS_LIMIT};
