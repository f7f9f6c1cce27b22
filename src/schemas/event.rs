//! Events the reducer understands

use serde::{Deserialize, Serialize};

use super::answers::{
    Availability, AvailabilityDetails, Category, EmploymentType, Intent, TransactionType,
};

/// A discrete user-triggered (or submission-triggered) event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineEvent {
    SetCategory { category: Category },
    SetIntent { intent: Intent },
    SetTransactionType { transaction_type: TransactionType },
    SetEmploymentType { employment_type: EmploymentType },
    SetAvailability { availability: Availability },
    SetAvailabilityDetails { details: AvailabilityDetails },
    LocationReady,
    LayoutReady,
    /// Submit call dispatched; emitted by the session, not the UI
    SubmitStarted,
    /// Submit call failed or timed out
    SubmitFailed { message: String },
    DetailsReady,
    Back,
    Reset,
}

impl PipelineEvent {
    /// Wire name of the event, used in logs and step notifications
    pub fn name(&self) -> &'static str {
        match self {
            PipelineEvent::SetCategory { .. } => "SET_CATEGORY",
            PipelineEvent::SetIntent { .. } => "SET_INTENT",
            PipelineEvent::SetTransactionType { .. } => "SET_TRANSACTION_TYPE",
            PipelineEvent::SetEmploymentType { .. } => "SET_EMPLOYMENT_TYPE",
            PipelineEvent::SetAvailability { .. } => "SET_AVAILABILITY",
            PipelineEvent::SetAvailabilityDetails { .. } => "SET_AVAILABILITY_DETAILS",
            PipelineEvent::LocationReady => "LOCATION_READY",
            PipelineEvent::LayoutReady => "LAYOUT_READY",
            PipelineEvent::SubmitStarted => "SUBMIT_STARTED",
            PipelineEvent::SubmitFailed { .. } => "SUBMIT_FAILED",
            PipelineEvent::DetailsReady => "DETAILS_READY",
            PipelineEvent::Back => "BACK",
            PipelineEvent::Reset => "RESET",
        }
    }
}

impl PipelineEvent {
    /// Events only the session emits around its own submit call
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            PipelineEvent::SubmitStarted
                | PipelineEvent::SubmitFailed { .. }
                | PipelineEvent::DetailsReady
        )
    }
}

impl std::fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
