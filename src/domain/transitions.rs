//! Pipeline reducer
//!
//! Pure functions computing the next state from the current state and one
//! event. Every forward transition that moves `step` pushes a checkpoint of
//! the state it left, so BACK restores exactly what the forward transition
//! started from.

use crate::schemas::{Checkpoint, PipelineEvent, PipelineState, Step};

use super::steps::{
    get_step_index, previous_step, step_after_availability, step_after_intent,
    step_after_location, PIPELINE_STEPS,
};
use super::validation::validate_event;

/// Result of applying an event
#[derive(Debug)]
pub enum TransitionResult {
    /// Event accepted, with the resulting state
    Applied {
        /// The state after the event
        next_state: PipelineState,
    },
    /// Event not valid for the current state
    Rejected {
        /// Description of why the event was rejected
        reason: String,
    },
}

impl TransitionResult {
    /// Check if the event was applied
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionResult::Applied { .. })
    }

    /// Check if the event was rejected
    pub fn is_rejected(&self) -> bool {
        matches!(self, TransitionResult::Rejected { .. })
    }

    /// Get the next state if the event was applied
    pub fn state(self) -> Option<PipelineState> {
        match self {
            TransitionResult::Applied { next_state } => Some(next_state),
            TransitionResult::Rejected { .. } => None,
        }
    }

    /// Get the rejection reason if the event was rejected
    pub fn reason(self) -> Option<String> {
        match self {
            TransitionResult::Applied { .. } => None,
            TransitionResult::Rejected { reason } => Some(reason),
        }
    }
}

/// Clear every answer and progress marker owned by a step after `step`.
fn clear_downstream(state: &mut PipelineState, step: Step) {
    let start = get_step_index(step).saturating_add(1);
    for later in PIPELINE_STEPS.iter().skip(start) {
        state.clear_answer(*later);
    }
}

/// Move to `to`, remembering the current state for BACK.
fn advance(state: &PipelineState, to: Step) -> PipelineState {
    let mut next = state.clone();
    next.history.push(Checkpoint::capture(state));
    next.step = to;
    next
}

/// Undo the last forward transition.
fn go_back(state: &PipelineState) -> PipelineState {
    let mut next = state.clone();
    next.is_submitting = false;
    next.error = None;

    if let Some(checkpoint) = next.history.pop() {
        checkpoint.restore_into(&mut next);
        return next;
    }

    // No history: derive the previous step from the answers
    if let Some(previous) = previous_step(state) {
        next.clear_answer(state.step);
        if previous == Step::Category {
            next.clear_answer(Step::Category);
        }
        next.step = previous;
    }
    next
}

/// Pure function that applies an event to a pipeline state.
///
/// This function:
/// - Never mutates the input state
/// - Validates the event against the current step before applying
/// - Clears every downstream answer when an upstream answer is reassigned
/// - Returns a rejection, and no new state, for out-of-order events
///
/// # Arguments
/// * `state` - The current state (immutable reference)
/// * `event` - The event to apply
///
/// # Returns
/// A TransitionResult with the next state or the rejection reason
pub fn apply_event(state: &PipelineState, event: &PipelineEvent) -> TransitionResult {
    let validation = validate_event(state, event);
    if !validation.valid {
        return TransitionResult::Rejected {
            reason: validation
                .reason
                .unwrap_or_else(|| format!("{} rejected", event.name())),
        };
    }

    let next_state = match event {
        PipelineEvent::SetCategory { category } => {
            // History restarts: the only step behind intent is category
            let origin = PipelineState::initial();
            let mut next = advance(&origin, Step::Intent);
            next.category = Some(*category);
            next
        }
        PipelineEvent::SetIntent { intent } => {
            let mut next = advance(state, step_after_intent(state.category));
            clear_downstream(&mut next, Step::Intent);
            next.intent = Some(*intent);
            next
        }
        PipelineEvent::SetTransactionType { transaction_type } => {
            let mut next = advance(state, Step::Availability);
            clear_downstream(&mut next, Step::EmploymentType);
            next.transaction_type = Some(*transaction_type);
            next
        }
        PipelineEvent::SetEmploymentType { employment_type } => {
            let mut next = advance(state, Step::Availability);
            clear_downstream(&mut next, Step::EmploymentType);
            next.employment_type = Some(*employment_type);
            next
        }
        PipelineEvent::SetAvailability { availability } => {
            let to = step_after_availability(state.category, state.intent, Some(*availability));
            let mut next = advance(state, to);
            clear_downstream(&mut next, Step::Availability);
            next.availability = Some(*availability);
            next
        }
        PipelineEvent::SetAvailabilityDetails { details } => {
            let mut next = state.clone();
            clear_downstream(&mut next, Step::AvailabilityDetails);
            next.availability_details = Some(details.clone());
            next
        }
        PipelineEvent::LocationReady => {
            let to = step_after_location(state.category, state.intent, state.availability);
            let mut next = advance(state, to);
            next.has_location = true;
            next
        }
        PipelineEvent::LayoutReady => {
            let mut next = advance(state, Step::Details);
            next.has_layout = true;
            next
        }
        PipelineEvent::SubmitStarted => {
            let mut next = state.clone();
            next.is_submitting = true;
            next.error = None;
            next
        }
        PipelineEvent::SubmitFailed { message } => {
            let mut next = state.clone();
            next.is_submitting = false;
            next.error = Some(message.clone());
            next
        }
        PipelineEvent::DetailsReady => {
            let mut next = advance(state, Step::Complete);
            next.has_details = true;
            next.is_submitting = false;
            next.error = None;
            next
        }
        PipelineEvent::Back => match state.step {
            Step::Category | Step::Complete => state.clone(),
            _ => go_back(state),
        },
        PipelineEvent::Reset => PipelineState::initial(),
    };

    TransitionResult::Applied { next_state }
}

/// Apply an event, keeping the current state when the event is rejected.
///
/// Rejections are logged and otherwise ignored so a stray event never breaks
/// the wizard.
pub fn reduce(state: &PipelineState, event: &PipelineEvent) -> PipelineState {
    match apply_event(state, event) {
        TransitionResult::Applied { next_state } => {
            tracing::debug!(
                event = event.name(),
                from = %state.step,
                to = %next_state.step,
                "pipeline transition"
            );
            next_state
        }
        TransitionResult::Rejected { reason } => {
            tracing::warn!(event = event.name(), step = %state.step, %reason, "pipeline event rejected");
            state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{
        Availability, AvailabilityDetails, Category, DurationUnit, EmploymentType, Intent,
        TransactionType,
    };

    fn run(events: &[PipelineEvent]) -> PipelineState {
        events
            .iter()
            .fold(PipelineState::initial(), |state, event| reduce(&state, event))
    }

    fn set_category(category: Category) -> PipelineEvent {
        PipelineEvent::SetCategory { category }
    }

    fn set_intent(intent: Intent) -> PipelineEvent {
        PipelineEvent::SetIntent { intent }
    }

    fn set_availability(availability: Availability) -> PipelineEvent {
        PipelineEvent::SetAvailability { availability }
    }

    fn sale() -> PipelineEvent {
        PipelineEvent::SetTransactionType {
            transaction_type: TransactionType::Sale,
        }
    }

    fn full_time() -> PipelineEvent {
        PipelineEvent::SetEmploymentType {
            employment_type: EmploymentType::FullTime,
        }
    }

    fn six_months() -> PipelineEvent {
        PipelineEvent::SetAvailabilityDetails {
            details: AvailabilityDetails::new("2025-01-01", 6, DurationUnit::Months),
        }
    }

    #[test]
    fn test_set_category_moves_to_intent() {
        let state = run(&[set_category(Category::Property)]);
        assert_eq!(state.step, Step::Intent);
        assert_eq!(state.category, Some(Category::Property));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_set_intent_branches_on_category() {
        let state = run(&[set_category(Category::Property), set_intent(Intent::Offer)]);
        assert_eq!(state.step, Step::TransactionType);

        let state = run(&[set_category(Category::Job), set_intent(Intent::Offer)]);
        assert_eq!(state.step, Step::EmploymentType);
    }

    #[test]
    fn test_set_category_clears_downstream() {
        let state = run(&[
            set_category(Category::Job),
            set_intent(Intent::Offer),
            full_time(),
            set_availability(Availability::Future),
            six_months(),
        ]);
        assert!(state.availability_details.is_some());

        let state = reduce(&state, &set_category(Category::Property));
        assert_eq!(state.step, Step::Intent);
        assert_eq!(state.category, Some(Category::Property));
        assert!(state.intent.is_none());
        assert!(state.transaction_type.is_none());
        assert!(state.employment_type.is_none());
        assert!(state.availability.is_none());
        assert!(state.availability_details.is_none());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_set_availability_future_gating() {
        let state = run(&[
            set_category(Category::Property),
            set_intent(Intent::Search),
            sale(),
            set_availability(Availability::Future),
        ]);
        assert_eq!(state.step, Step::Location);

        let state = run(&[
            set_category(Category::Property),
            set_intent(Intent::Offer),
            sale(),
            set_availability(Availability::Future),
        ]);
        assert_eq!(state.step, Step::AvailabilityDetails);
    }

    #[test]
    fn test_set_availability_details_keeps_step() {
        let state = run(&[
            set_category(Category::Job),
            set_intent(Intent::Offer),
            full_time(),
            set_availability(Availability::Future),
            six_months(),
        ]);
        assert_eq!(state.step, Step::AvailabilityDetails);
        assert_eq!(
            state.availability_details,
            Some(AvailabilityDetails::new("2025-01-01", 6, DurationUnit::Months))
        );

        let state = reduce(&state, &PipelineEvent::LocationReady);
        assert_eq!(state.step, Step::Details);
        assert!(state.has_location);
    }

    #[test]
    fn test_job_search_skips_details() {
        let state = run(&[
            set_category(Category::Job),
            set_intent(Intent::Search),
            full_time(),
            set_availability(Availability::Now),
            PipelineEvent::LocationReady,
        ]);
        assert_eq!(state.step, Step::Complete);
        assert!(state.has_location);
        assert!(!state.has_details);
    }

    #[test]
    fn test_back_restores_previous_state() {
        let before = run(&[set_category(Category::Property), set_intent(Intent::Offer), sale()]);
        let after = reduce(&before, &set_availability(Availability::Now));
        let back = reduce(&after, &PipelineEvent::Back);
        assert_eq!(back, before);
    }

    #[test]
    fn test_back_from_intent_returns_to_category() {
        let state = run(&[set_category(Category::Job), PipelineEvent::Back]);
        assert_eq!(state, PipelineState::initial());
    }

    #[test]
    fn test_back_is_noop_at_edges() {
        let initial = PipelineState::initial();
        assert_eq!(reduce(&initial, &PipelineEvent::Back), initial);

        let complete = run(&[
            set_category(Category::Job),
            set_intent(Intent::Search),
            full_time(),
            set_availability(Availability::Now),
            PipelineEvent::LocationReady,
        ]);
        assert_eq!(reduce(&complete, &PipelineEvent::Back), complete);
    }

    #[test]
    fn test_back_without_history_uses_derived_table() {
        let state = PipelineState {
            step: Step::Details,
            category: Some(Category::Property),
            intent: Some(Intent::Offer),
            transaction_type: Some(TransactionType::Rent),
            availability: Some(Availability::Now),
            has_location: true,
            has_layout: true,
            ..PipelineState::initial()
        };
        let back = reduce(&state, &PipelineEvent::Back);
        assert_eq!(back.step, Step::Layout);

        let state = PipelineState {
            step: Step::Availability,
            category: Some(Category::Job),
            intent: Some(Intent::Offer),
            employment_type: Some(EmploymentType::Seasonal),
            availability: Some(Availability::Now),
            ..PipelineState::initial()
        };
        let back = reduce(&state, &PipelineEvent::Back);
        assert_eq!(back.step, Step::EmploymentType);
        assert!(back.availability.is_none());
        assert_eq!(back.employment_type, Some(EmploymentType::Seasonal));

        let state = PipelineState {
            step: Step::Intent,
            category: Some(Category::Job),
            ..PipelineState::initial()
        };
        assert_eq!(reduce(&state, &PipelineEvent::Back), PipelineState::initial());
    }

    #[test]
    fn test_back_clears_submission_state() {
        let mut state = run(&[
            set_category(Category::Property),
            set_intent(Intent::Search),
            sale(),
            set_availability(Availability::Now),
            PipelineEvent::LocationReady,
        ]);
        assert_eq!(state.step, Step::Details);
        state = reduce(&state, &PipelineEvent::SubmitStarted);
        assert!(state.is_submitting);

        let back = reduce(&state, &PipelineEvent::Back);
        assert_eq!(back.step, Step::Location);
        assert!(!back.is_submitting);
        assert!(!back.has_location);
    }

    #[test]
    fn test_submit_failure_keeps_details() {
        let state = run(&[
            set_category(Category::Property),
            set_intent(Intent::Search),
            sale(),
            set_availability(Availability::Now),
            PipelineEvent::LocationReady,
            PipelineEvent::SubmitStarted,
            PipelineEvent::SubmitFailed {
                message: "network down".to_string(),
            },
        ]);
        assert_eq!(state.step, Step::Details);
        assert!(!state.is_submitting);
        assert_eq!(state.error.as_deref(), Some("network down"));

        let state = reduce(&state, &PipelineEvent::SubmitStarted);
        assert!(state.error.is_none());
        let state = reduce(&state, &PipelineEvent::DetailsReady);
        assert_eq!(state.step, Step::Complete);
        assert!(state.has_details);
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_rejected_event_leaves_state_unchanged() {
        let state = run(&[set_category(Category::Property)]);
        let result = apply_event(&state, &PipelineEvent::LayoutReady);
        assert!(result.is_rejected());
        assert!(result.reason().unwrap().contains("LAYOUT_READY"));

        assert_eq!(reduce(&state, &PipelineEvent::LayoutReady), state);
    }

    #[test]
    fn test_apply_event_does_not_mutate_input() {
        let state = run(&[set_category(Category::Job)]);
        let original = state.clone();
        let result = apply_event(&state, &set_intent(Intent::Offer));
        assert!(result.is_applied());
        assert_eq!(state, original);
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let state = run(&[
            set_category(Category::Job),
            set_intent(Intent::Offer),
            full_time(),
            PipelineEvent::Reset,
        ]);
        assert_eq!(state, PipelineState::initial());
    }
}
