//! Session dispatcher - one method per pipeline event

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::domain::{apply_event, can_submit, Capabilities, TransitionResult};
use crate::errors::{PipelineError, Result};
use crate::schemas::{
    Availability, AvailabilityDetails, Category, EmploymentType, Intent, PipelineConfig,
    PipelineEvent, PipelineState, Step, SubmitPayload, TransactionType,
};

use super::submit::{SubmitOutcome, Submitter};

/// A step change reported to the observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepChange {
    pub from: Step,
    pub to: Step,
    /// Name of the event that caused the change
    pub event: &'static str,
}

/// Callback notified after every accepted event that changes the step
pub type StepObserver = Arc<dyn Fn(&StepChange) + Send + Sync>;

/// Callback run after the session is reset
pub type CloseCallback = Arc<dyn Fn() + Send + Sync>;

/// Options for a wizard session
#[derive(Clone, Default)]
pub struct SessionOptions {
    pub config: PipelineConfig,
    pub on_close: Option<CloseCallback>,
    pub on_step_change: Option<StepObserver>,
}

struct SessionInner {
    state: PipelineState,
    /// Bumped on every accepted event; a pending submit only applies its
    /// result if the generation it captured is still current.
    generation: u64,
}

/// A running wizard session
pub struct PipelineSession<S> {
    inner: Mutex<SessionInner>,
    submitter: S,
    options: SessionOptions,
}

impl<S: Submitter> PipelineSession<S> {
    /// Create a session starting from the initial state
    pub fn new(submitter: S, options: SessionOptions) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                state: PipelineState::initial(),
                generation: 0,
            }),
            submitter,
            options,
        }
    }

    /// Get a snapshot of the current state
    pub async fn state(&self) -> PipelineState {
        self.inner.lock().await.state.clone()
    }

    /// Evaluate the derived predicates against the current state
    pub async fn capabilities(&self) -> Capabilities {
        Capabilities::of(&self.inner.lock().await.state)
    }

    /// Apply an event, returning the resulting state.
    ///
    /// Rejected events leave the state unchanged and return
    /// `TransitionRejected`. The submit events are refused here; the details
    /// step is only finished through `details_ready`.
    pub async fn dispatch(&self, event: PipelineEvent) -> Result<PipelineState> {
        if event.is_internal() {
            tracing::warn!(event = event.name(), "submit events cannot be dispatched directly");
            return Err(PipelineError::TransitionRejected(format!(
                "{} is emitted by details_ready and cannot be dispatched",
                event.name()
            )));
        }

        let (state, change) = {
            let mut inner = self.inner.lock().await;
            let change = Self::commit(&mut inner, &event)?;
            (inner.state.clone(), change)
        };
        self.notify(change);
        Ok(state)
    }

    fn commit(inner: &mut SessionInner, event: &PipelineEvent) -> Result<Option<StepChange>> {
        match apply_event(&inner.state, event) {
            TransitionResult::Applied { next_state } => {
                let from = inner.state.step;
                tracing::debug!(event = event.name(), %from, to = %next_state.step, "pipeline transition");
                inner.state = next_state;
                inner.generation += 1;

                let to = inner.state.step;
                Ok((from != to).then_some(StepChange {
                    from,
                    to,
                    event: event.name(),
                }))
            }
            TransitionResult::Rejected { reason } => {
                tracing::warn!(event = event.name(), step = %inner.state.step, %reason, "pipeline event rejected");
                Err(PipelineError::TransitionRejected(reason))
            }
        }
    }

    fn notify(&self, change: Option<StepChange>) {
        if !self.options.config.emit_step_changes {
            return;
        }
        if let (Some(change), Some(observer)) = (change, &self.options.on_step_change) {
            observer(&change);
        }
    }

    pub async fn set_category(&self, category: Category) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::SetCategory { category }).await
    }

    pub async fn set_intent(&self, intent: Intent) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::SetIntent { intent }).await
    }

    pub async fn set_transaction_type(
        &self,
        transaction_type: TransactionType,
    ) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::SetTransactionType { transaction_type })
            .await
    }

    pub async fn set_employment_type(
        &self,
        employment_type: EmploymentType,
    ) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::SetEmploymentType { employment_type })
            .await
    }

    pub async fn set_availability(&self, availability: Availability) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::SetAvailability { availability })
            .await
    }

    pub async fn set_availability_details(
        &self,
        details: AvailabilityDetails,
    ) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::SetAvailabilityDetails { details })
            .await
    }

    pub async fn location_ready(&self) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::LocationReady).await
    }

    pub async fn layout_ready(&self) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::LayoutReady).await
    }

    pub async fn back(&self) -> Result<PipelineState> {
        self.dispatch(PipelineEvent::Back).await
    }

    /// Submit the answers and complete the pipeline.
    ///
    /// This function:
    /// 1. Returns `Ignored` unless the details step can be submitted
    /// 2. Marks the state as submitting and snapshots the answers
    /// 3. Awaits the submitter under the configured timeout, without holding the state lock
    /// 4. Drops the result as `Stale` if any event was applied in the meantime
    /// 5. Completes the pipeline on success, or records the error and stays on details
    pub async fn details_ready(&self) -> Result<SubmitOutcome> {
        let (payload, generation, started) = {
            let mut inner = self.inner.lock().await;
            if !can_submit(&inner.state) {
                tracing::debug!(step = %inner.state.step, submitting = inner.state.is_submitting, "submit ignored");
                return Ok(SubmitOutcome::Ignored);
            }
            let started = Self::commit(&mut inner, &PipelineEvent::SubmitStarted)?;
            (
                SubmitPayload::from_state(&inner.state),
                inner.generation,
                started,
            )
        };
        self.notify(started);

        let limit = self.options.config.submit_timeout();
        let result = match timeout(limit, self.submitter.submit(payload)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(message)) => Err(PipelineError::SubmitFailed(message)),
            Err(_) => Err(PipelineError::Timeout(format!(
                "submit did not finish within {}ms",
                limit.as_millis()
            ))),
        };

        let (outcome, change) = {
            let mut inner = self.inner.lock().await;
            if inner.generation != generation {
                tracing::warn!(step = %inner.state.step, "ignoring stale submit result");
                return Ok(SubmitOutcome::Stale);
            }

            match result {
                Ok(()) => {
                    tracing::info!("listing submitted");
                    let change = Self::commit(&mut inner, &PipelineEvent::DetailsReady)?;
                    (SubmitOutcome::Submitted, change)
                }
                Err(e) => {
                    tracing::warn!(code = e.code(), error = %e, "listing submission failed");
                    let message = e.to_string();
                    let change = Self::commit(
                        &mut inner,
                        &PipelineEvent::SubmitFailed {
                            message: message.clone(),
                        },
                    )?;
                    (SubmitOutcome::Failed { error: message }, change)
                }
            }
        };
        self.notify(change);

        Ok(outcome)
    }

    /// Start over, then run the close callback.
    pub async fn reset(&self) -> Result<PipelineState> {
        let result = self.dispatch(PipelineEvent::Reset).await;

        if let Some(ref on_close) = self.options.on_close {
            on_close();
        }

        result
    }
}
