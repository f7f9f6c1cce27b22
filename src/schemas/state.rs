//! Pipeline state - the single record the reducer owns

use serde::{Deserialize, Serialize};

use super::answers::{
    Availability, AvailabilityDetails, Category, EmploymentType, Intent, TransactionType,
};

/// A step of the listing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Category,
    Intent,
    TransactionType,
    EmploymentType,
    Availability,
    AvailabilityDetails,
    Location,
    Layout,
    Details,
    Complete,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Category => write!(f, "category"),
            Step::Intent => write!(f, "intent"),
            Step::TransactionType => write!(f, "transactionType"),
            Step::EmploymentType => write!(f, "employmentType"),
            Step::Availability => write!(f, "availability"),
            Step::AvailabilityDetails => write!(f, "availabilityDetails"),
            Step::Location => write!(f, "location"),
            Step::Layout => write!(f, "layout"),
            Step::Details => write!(f, "details"),
            Step::Complete => write!(f, "complete"),
        }
    }
}

impl std::str::FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Step::Category),
            "intent" => Ok(Step::Intent),
            "transactionType" => Ok(Step::TransactionType),
            "employmentType" => Ok(Step::EmploymentType),
            "availability" => Ok(Step::Availability),
            "availabilityDetails" => Ok(Step::AvailabilityDetails),
            "location" => Ok(Step::Location),
            "layout" => Ok(Step::Layout),
            "details" => Ok(Step::Details),
            "complete" => Ok(Step::Complete),
            _ => Err(format!("Unknown pipeline step: {}", s)),
        }
    }
}

/// Snapshot of the state a forward transition left behind.
///
/// Restoring a checkpoint undoes exactly one forward transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub step: Step,
    pub category: Option<Category>,
    pub intent: Option<Intent>,
    pub transaction_type: Option<TransactionType>,
    pub employment_type: Option<EmploymentType>,
    pub availability: Option<Availability>,
    pub availability_details: Option<AvailabilityDetails>,
    pub has_location: bool,
    pub has_layout: bool,
    pub has_details: bool,
}

impl Checkpoint {
    /// Capture the answers and progress markers of a state
    pub fn capture(state: &PipelineState) -> Self {
        Checkpoint {
            step: state.step,
            category: state.category,
            intent: state.intent,
            transaction_type: state.transaction_type,
            employment_type: state.employment_type,
            availability: state.availability,
            availability_details: state.availability_details.clone(),
            has_location: state.has_location,
            has_layout: state.has_layout,
            has_details: state.has_details,
        }
    }

    /// Write this checkpoint back into a state, leaving its history untouched
    pub fn restore_into(self, state: &mut PipelineState) {
        state.step = self.step;
        state.category = self.category;
        state.intent = self.intent;
        state.transaction_type = self.transaction_type;
        state.employment_type = self.employment_type;
        state.availability = self.availability;
        state.availability_details = self.availability_details;
        state.has_location = self.has_location;
        state.has_layout = self.has_layout;
        state.has_details = self.has_details;
    }
}

/// State of one wizard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineState {
    /// Current position in the pipeline
    pub step: Step,

    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default)]
    pub intent: Option<Intent>,

    /// Only set when category is property
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,

    /// Only set when category is job
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,

    #[serde(default)]
    pub availability: Option<Availability>,

    #[serde(default)]
    pub availability_details: Option<AvailabilityDetails>,

    #[serde(default)]
    pub has_location: bool,

    #[serde(default)]
    pub has_layout: bool,

    #[serde(default)]
    pub has_details: bool,

    /// True while the submit call is in flight
    #[serde(default)]
    pub is_submitting: bool,

    /// Last submission error
    #[serde(default)]
    pub error: Option<String>,

    /// Checkpoints pushed by forward transitions, most recent last
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<Checkpoint>,
}

impl PipelineState {
    /// Fresh state for a new wizard session
    pub fn initial() -> Self {
        PipelineState {
            step: Step::Category,
            category: None,
            intent: None,
            transaction_type: None,
            employment_type: None,
            availability: None,
            availability_details: None,
            has_location: false,
            has_layout: false,
            has_details: false,
            is_submitting: false,
            error: None,
            history: Vec::new(),
        }
    }

    /// Clear the answer or progress marker a step is responsible for
    pub fn clear_answer(&mut self, step: Step) {
        match step {
            Step::Category => self.category = None,
            Step::Intent => self.intent = None,
            Step::TransactionType => self.transaction_type = None,
            Step::EmploymentType => self.employment_type = None,
            Step::Availability => self.availability = None,
            Step::AvailabilityDetails => self.availability_details = None,
            Step::Location => self.has_location = false,
            Step::Layout => self.has_layout = false,
            Step::Details => self.has_details = false,
            Step::Complete => {}
        }
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        PipelineState::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_serialization() {
        assert_eq!(serde_json::to_string(&Step::Category).unwrap(), "\"category\"");
        assert_eq!(
            serde_json::to_string(&Step::TransactionType).unwrap(),
            "\"transactionType\""
        );
        assert_eq!(
            serde_json::to_string(&Step::AvailabilityDetails).unwrap(),
            "\"availabilityDetails\""
        );
        assert_eq!(serde_json::to_string(&Step::Complete).unwrap(), "\"complete\"");
    }

    #[test]
    fn test_step_display_matches_serde() {
        for step in [Step::EmploymentType, Step::Layout, Step::Details] {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{}\"", step));
            assert_eq!(step.to_string().parse::<Step>().unwrap(), step);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = PipelineState::initial();
        assert_eq!(state.step, Step::Category);
        assert!(state.category.is_none());
        assert!(!state.has_location && !state.has_layout && !state.has_details);
        assert!(!state.is_submitting);
        assert!(state.error.is_none());
        assert!(state.history.is_empty());
        assert_eq!(state, PipelineState::default());
    }

    #[test]
    fn test_state_json_uses_camel_case() {
        let mut state = PipelineState::initial();
        state.step = Step::Intent;
        state.category = Some(Category::Job);

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"hasLocation\":false"));
        assert!(json.contains("\"isSubmitting\":false"));
        assert!(json.contains("\"step\":\"intent\""));
        assert!(!json.contains("history"));
    }

    #[test]
    fn test_partial_state_json() {
        let json = r#"{"step": "layout", "category": "property", "intent": "offer"}"#;
        let state: PipelineState = serde_json::from_str(json).unwrap();
        assert_eq!(state.step, Step::Layout);
        assert_eq!(state.category, Some(Category::Property));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut state = PipelineState::initial();
        state.step = Step::Availability;
        state.category = Some(Category::Property);
        state.intent = Some(Intent::Offer);
        let checkpoint = Checkpoint::capture(&state);

        state.step = Step::Location;
        state.availability = Some(Availability::Now);
        state.history.push(checkpoint.clone());

        checkpoint.restore_into(&mut state);
        assert_eq!(state.step, Step::Availability);
        assert!(state.availability.is_none());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_clear_answer() {
        let mut state = PipelineState::initial();
        state.intent = Some(Intent::Search);
        state.has_layout = true;

        state.clear_answer(Step::Intent);
        state.clear_answer(Step::Layout);
        assert!(state.intent.is_none());
        assert!(!state.has_layout);
    }
}
