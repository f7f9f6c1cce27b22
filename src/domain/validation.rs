//! Validation rules for pipeline events
//!
//! An event is only accepted in the step that asks for it. Out-of-order events
//! (for example a stale submit result arriving after the user navigated away)
//! are rejected instead of silently jumping the wizard.

use chrono::NaiveDate;

use crate::schemas::{AvailabilityDetails, Category, PipelineEvent, PipelineState, Step};

/// Result of a validation check
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

fn expect_step(state: &PipelineState, event: &PipelineEvent, expected: Step) -> ValidationResult {
    if state.step != expected {
        return ValidationResult::failure(format!(
            "cannot apply {} in step {}",
            event.name(),
            state.step
        ));
    }
    ValidationResult::success()
}

/// Validate the availability details a user entered
pub fn validate_availability_details(details: &AvailabilityDetails) -> ValidationResult {
    if details.duration == 0 {
        return ValidationResult::failure("availability duration must be at least 1");
    }
    if NaiveDate::parse_from_str(&details.date, "%Y-%m-%d").is_err() {
        return ValidationResult::failure(format!(
            "availability date '{}' is not a YYYY-MM-DD date",
            details.date
        ));
    }
    ValidationResult::success()
}

/// Validate an event against the current state
pub fn validate_event(state: &PipelineState, event: &PipelineEvent) -> ValidationResult {
    match event {
        PipelineEvent::SetCategory { .. } | PipelineEvent::Back | PipelineEvent::Reset => {
            ValidationResult::success()
        }
        PipelineEvent::SetIntent { .. } => {
            if state.category.is_none() {
                return ValidationResult::failure("category not selected");
            }
            expect_step(state, event, Step::Intent)
        }
        PipelineEvent::SetTransactionType { .. } => {
            if state.category != Some(Category::Property) {
                return ValidationResult::failure("transaction type only applies to property listings");
            }
            expect_step(state, event, Step::TransactionType)
        }
        PipelineEvent::SetEmploymentType { .. } => {
            if state.category != Some(Category::Job) {
                return ValidationResult::failure("employment type only applies to job listings");
            }
            expect_step(state, event, Step::EmploymentType)
        }
        PipelineEvent::SetAvailability { .. } => expect_step(state, event, Step::Availability),
        PipelineEvent::SetAvailabilityDetails { details } => {
            let result = expect_step(state, event, Step::AvailabilityDetails);
            if !result.valid {
                return result;
            }
            validate_availability_details(details)
        }
        PipelineEvent::LocationReady => match state.step {
            Step::Location => ValidationResult::success(),
            Step::AvailabilityDetails if state.availability_details.is_some() => {
                ValidationResult::success()
            }
            Step::AvailabilityDetails => {
                ValidationResult::failure("availability details not entered")
            }
            _ => expect_step(state, event, Step::Location),
        },
        PipelineEvent::LayoutReady => expect_step(state, event, Step::Layout),
        PipelineEvent::SubmitStarted => {
            if state.is_submitting {
                return ValidationResult::failure("a submission is already in flight");
            }
            expect_step(state, event, Step::Details)
        }
        PipelineEvent::SubmitFailed { .. } => {
            if !state.is_submitting {
                return ValidationResult::failure("no submission in flight");
            }
            expect_step(state, event, Step::Details)
        }
        PipelineEvent::DetailsReady => {
            if !state.is_submitting {
                return ValidationResult::failure("details are only completed by a successful submission");
            }
            expect_step(state, event, Step::Details)
        }
    }
}
