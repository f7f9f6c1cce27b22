//! Submit payload - the answers handed to the injected submit function

use serde::{Deserialize, Serialize};

use super::answers::{
    Availability, AvailabilityDetails, Category, EmploymentType, Intent, TransactionType,
};
use super::state::PipelineState;

/// Snapshot of the user's answers at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub category: Option<Category>,
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    pub availability: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_details: Option<AvailabilityDetails>,
}

impl SubmitPayload {
    /// Snapshot the answers of a state
    pub fn from_state(state: &PipelineState) -> Self {
        SubmitPayload {
            category: state.category,
            intent: state.intent,
            transaction_type: state.transaction_type,
            employment_type: state.employment_type,
            availability: state.availability,
            availability_details: state.availability_details.clone(),
        }
    }
}
