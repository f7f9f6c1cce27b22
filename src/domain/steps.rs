//! Pipeline step definitions and branch rules
//!
//! The pipeline walks:
//! category → intent → transactionType | employmentType → availability →
//! (availabilityDetails) → location → (layout) → details → complete
//!
//! Which optional steps appear depends on three answers: category, intent and
//! availability. Every branch decision lives in this module so the forward
//! transitions and the derived back-navigation table share one definition.

use crate::schemas::{Availability, Category, Intent, PipelineState, Step};

/// Every pipeline step in canonical order.
///
/// Adding a step means adding it here, to the forward transitions and to
/// `previous_step`; the exhaustive matches below fail to compile otherwise.
pub const PIPELINE_STEPS: &[Step] = &[
    Step::Category,
    Step::Intent,
    Step::TransactionType,
    Step::EmploymentType,
    Step::Availability,
    Step::AvailabilityDetails,
    Step::Location,
    Step::Layout,
    Step::Details,
    Step::Complete,
];

/// Get the 0-based index of a step in the canonical ordering.
pub fn get_step_index(step: Step) -> usize {
    PIPELINE_STEPS
        .iter()
        .position(|&s| s == step)
        .unwrap_or(usize::MAX)
}

/// Check if a step is the terminal step (complete).
pub fn is_terminal_step(step: Step) -> bool {
    step == Step::Complete
}

/// Whether choosing `availability` leads to the availability details step.
///
/// Future availability asks for details on property offers and on every job
/// listing.
pub fn requires_availability_details(
    category: Option<Category>,
    intent: Option<Intent>,
    availability: Option<Availability>,
) -> bool {
    let offers_property = category == Some(Category::Property) && intent == Some(Intent::Offer);
    availability == Some(Availability::Future)
        && (offers_property || category == Some(Category::Job))
}

/// Whether the layout step follows location (property offered right away).
pub fn includes_layout(
    category: Option<Category>,
    intent: Option<Intent>,
    availability: Option<Availability>,
) -> bool {
    category == Some(Category::Property)
        && intent == Some(Intent::Offer)
        && availability == Some(Availability::Now)
}

/// Whether the pipeline completes without a details step (job searches).
pub fn skips_details(category: Option<Category>, intent: Option<Intent>) -> bool {
    category == Some(Category::Job) && intent == Some(Intent::Search)
}

/// Step entered once the intent is chosen.
pub fn step_after_intent(category: Option<Category>) -> Step {
    match category {
        Some(Category::Property) => Step::TransactionType,
        _ => Step::EmploymentType,
    }
}

/// Step entered once availability is chosen.
pub fn step_after_availability(
    category: Option<Category>,
    intent: Option<Intent>,
    availability: Option<Availability>,
) -> Step {
    if requires_availability_details(category, intent, availability) {
        Step::AvailabilityDetails
    } else {
        Step::Location
    }
}

/// Step entered once the location is ready.
pub fn step_after_location(
    category: Option<Category>,
    intent: Option<Intent>,
    availability: Option<Availability>,
) -> Step {
    if includes_layout(category, intent, availability) {
        Step::Layout
    } else if skips_details(category, intent) {
        Step::Complete
    } else {
        Step::Details
    }
}

/// Derive the previous step from the current answers.
///
/// Used when a state carries no navigation history. Returns `None` for the
/// first and the terminal step, where back navigation is a no-op.
pub fn previous_step(state: &PipelineState) -> Option<Step> {
    let (category, intent, availability) = (state.category, state.intent, state.availability);
    match state.step {
        Step::Category | Step::Complete => None,
        Step::Intent => Some(Step::Category),
        Step::TransactionType | Step::EmploymentType => Some(Step::Intent),
        Step::Availability => match category {
            Some(Category::Job) => Some(Step::EmploymentType),
            _ => Some(Step::TransactionType),
        },
        Step::AvailabilityDetails => Some(Step::Availability),
        Step::Location => {
            if requires_availability_details(category, intent, availability) {
                Some(Step::AvailabilityDetails)
            } else {
                Some(Step::Availability)
            }
        }
        Step::Layout => Some(Step::Location),
        Step::Details => {
            if includes_layout(category, intent, availability) {
                Some(Step::Layout)
            } else if requires_availability_details(category, intent, availability) {
                // LOCATION_READY fires from the availability details step on this branch
                Some(Step::AvailabilityDetails)
            } else {
                Some(Step::Location)
            }
        }
    }
}

/// The full step sequence, from category to complete, for a set of answers.
pub fn expected_path(category: Category, intent: Intent, availability: Availability) -> Vec<Step> {
    let (c, i, a) = (Some(category), Some(intent), Some(availability));

    let mut path = vec![
        Step::Category,
        Step::Intent,
        step_after_intent(c),
        Step::Availability,
        step_after_availability(c, i, a),
    ];

    match step_after_location(c, i, a) {
        Step::Layout => path.extend([Step::Layout, Step::Details]),
        Step::Details => path.push(Step::Details),
        _ => {}
    }

    path.push(Step::Complete);
    path
}

/// Position of the current step on the pipeline path
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Progress {
    /// 1-based position of the current step
    pub position: usize,

    /// Length of the path, once the answers that decide it are known
    pub total: Option<usize>,
}

/// Compute progress through the pipeline for the current state.
pub fn progress(state: &PipelineState) -> Progress {
    let path = match (state.category, state.intent, state.availability) {
        (Some(c), Some(i), Some(a)) => Some(expected_path(c, i, a)),
        _ => None,
    };

    let position = path
        .as_ref()
        .and_then(|p| p.iter().position(|&s| s == state.step))
        .map(|index| index + 1)
        .unwrap_or_else(|| derived_position(state));

    Progress {
        position,
        total: path.map(|p| p.len()),
    }
}

/// Count the steps behind the current one by walking `previous_step`.
fn derived_position(state: &PipelineState) -> usize {
    let mut cursor = PipelineState {
        step: state.step,
        category: state.category,
        intent: state.intent,
        availability: state.availability,
        ..PipelineState::initial()
    };
    let mut position = 1;
    while let Some(step) = previous_step(&cursor) {
        cursor.step = step;
        position += 1;
    }
    position
}
