//! Injected submit function

use std::future::Future;

use serde::Serialize;

use crate::schemas::SubmitPayload;

/// Sends the finished listing somewhere.
///
/// Any `Fn(SubmitPayload) -> impl Future<Output = Result<(), String>>` closure
/// is a submitter.
pub trait Submitter: Send + Sync {
    /// Submit the answers; an `Err` carries the message shown to the user
    fn submit(
        &self,
        payload: SubmitPayload,
    ) -> impl Future<Output = std::result::Result<(), String>> + Send;
}

impl<F, Fut> Submitter for F
where
    F: Fn(SubmitPayload) -> Fut + Send + Sync,
    Fut: Future<Output = std::result::Result<(), String>> + Send,
{
    fn submit(
        &self,
        payload: SubmitPayload,
    ) -> impl Future<Output = std::result::Result<(), String>> + Send {
        self(payload)
    }
}

/// What happened to a `details_ready` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Submit succeeded and the pipeline is complete
    Submitted,
    /// Submit failed or timed out; the user can retry from details
    Failed { error: String },
    /// Nothing to submit: not on details, or a submit is already in flight
    Ignored,
    /// The state moved on while the submit was pending; its result was dropped
    Stale,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}
