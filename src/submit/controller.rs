//! Submission controller driving the view-status state machine.

use reqwest::{header, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::store::state::{StateHandle, ViewStatus};

use super::types::{PfbTx, SubmitPfbRequest};

/// Content type sent with every submission. The node endpoints expect the
/// charset qualifier, so the default `application/json` is overridden.
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Driver of the single asynchronous submission operation.
///
/// Outcomes are recorded in the shared state rather than returned: a remote
/// rejection or transport failure ends in [`ViewStatus::Error`] with a string
/// message, an accepted submission in [`ViewStatus::Success`] with the parsed
/// response body. There is no in-flight guard: calling [`submit`] while a
/// previous call is still `Loading` starts an independent request, and
/// whichever response resolves last overwrites the submission fields.
///
/// [`submit`]: SubmissionController::submit
#[derive(Debug, Clone)]
pub struct SubmissionController {
    state: StateHandle,
    http: reqwest::Client,
}

impl SubmissionController {
    /// Create a controller writing to `state` and submitting over `http`.
    pub fn new(state: StateHandle, http: reqwest::Client) -> Self {
        Self { state, http }
    }

    /// Submit `tx` to `url` and record the outcome.
    ///
    /// Transitions to `Loading` from any state, clearing a prior result, then
    /// performs one POST. Success is defined solely by HTTP status 200; the
    /// response body is parsed as JSON regardless of status. The call itself
    /// never fails, all failures surface through the state.
    #[instrument(skip(self, tx), fields(namespace_id = %tx.namespace_id, url = %url))]
    pub async fn submit(&self, tx: &PfbTx, url: &str) {
        self.state.update(|s| {
            s.view_status = ViewStatus::Loading;
            s.result = None;
        });

        let request = SubmitPfbRequest::from_tx(tx);
        match self.post(url, &request).await {
            Ok((status, body)) if status == StatusCode::OK => {
                debug!("submission accepted");
                self.state.update(|s| {
                    s.view_status = ViewStatus::Success;
                    s.result = Some(body);
                    s.error_message.clear();
                });
            }
            Ok((status, body)) => {
                warn!(%status, "node rejected the submission");
                self.state.update(|s| {
                    s.view_status = ViewStatus::Error;
                    s.error_message = body.to_string();
                    s.result = None;
                });
            }
            Err(err) => {
                warn!(%err, "submission failed without a usable response");
                self.state.update(|s| {
                    s.view_status = ViewStatus::Error;
                    s.error_message = err.to_string();
                    s.result = None;
                });
            }
        }
    }

    /// Return to `Idle` unconditionally, clearing result and error message.
    ///
    /// Called once at startup to discard stale state from a prior session.
    pub fn reset(&self) {
        self.state.update(|s| {
            s.view_status = ViewStatus::Idle;
            s.result = None;
            s.error_message.clear();
        });
    }

    async fn post(
        &self,
        url: &str,
        request: &SubmitPfbRequest,
    ) -> Result<(StatusCode, Value), reqwest::Error> {
        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<Value>().await?;
        Ok((status, body))
    }
}
