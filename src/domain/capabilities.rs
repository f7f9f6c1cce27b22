//! Derived "can" predicates
//!
//! Computed from the state on every query, never stored.

use serde::Serialize;

use crate::schemas::{PipelineState, Step};

use super::steps::is_terminal_step;

/// Whether BACK moves anywhere from the current step
pub fn can_go_back(state: &PipelineState) -> bool {
    state.step != Step::Category && !is_terminal_step(state.step)
}

/// Whether the details can be submitted right now
pub fn can_submit(state: &PipelineState) -> bool {
    state.step == Step::Details && !state.is_submitting
}

pub fn show_availability_details(state: &PipelineState) -> bool {
    state.step == Step::AvailabilityDetails
}

pub fn show_layout(state: &PipelineState) -> bool {
    state.step == Step::Layout
}

/// All predicates for one state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub can_go_back: bool,
    pub can_submit: bool,
    pub show_availability_details: bool,
    pub show_layout: bool,
}

impl Capabilities {
    /// Evaluate every predicate against `state`
    pub fn of(state: &PipelineState) -> Self {
        Capabilities {
            can_go_back: can_go_back(state),
            can_submit: can_submit(state),
            show_availability_details: show_availability_details(state),
            show_layout: show_layout(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PIPELINE_STEPS;

    fn state_at(step: Step) -> PipelineState {
        PipelineState {
            step,
            ..PipelineState::initial()
        }
    }

    #[test]
    fn test_can_go_back() {
        for step in PIPELINE_STEPS {
            let expected = !matches!(step, Step::Category | Step::Complete);
            assert_eq!(can_go_back(&state_at(*step)), expected, "at {}", step);
        }
    }

    #[test]
    fn test_can_submit() {
        let mut state = state_at(Step::Details);
        assert!(can_submit(&state));

        state.is_submitting = true;
        assert!(!can_submit(&state));

        assert!(!can_submit(&state_at(Step::Layout)));
    }

    #[test]
    fn test_show_predicates() {
        let caps = Capabilities::of(&state_at(Step::AvailabilityDetails));
        assert!(caps.show_availability_details);
        assert!(!caps.show_layout);

        let caps = Capabilities::of(&state_at(Step::Layout));
        assert!(caps.show_layout);
        assert!(caps.can_go_back);
        assert!(!caps.can_submit);
    }

    #[test]
    fn test_capabilities_follow_state() {
        let mut state = state_at(Step::Details);
        assert!(Capabilities::of(&state).can_submit);
        state.is_submitting = true;
        assert!(!Capabilities::of(&state).can_submit);
    }
}
