//! Domain logic for pipeline steps and transitions

mod capabilities;
mod steps;
mod transitions;
mod validation;


pub use capabilities::{
    can_go_back, can_submit, show_availability_details, show_layout, Capabilities,
};
pub use steps::{
    expected_path, get_step_index, includes_layout, is_terminal_step, previous_step, progress,
    requires_availability_details, skips_details, step_after_availability, step_after_intent,
    step_after_location, Progress, PIPELINE_STEPS,
};
pub use transitions::{apply_event, reduce, TransitionResult};
pub use validation::{validate_availability_details, validate_event, ValidationResult};
