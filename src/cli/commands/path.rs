//! Path command - Print the steps visited for a set of answers

use serde::Serialize;

use crate::domain::expected_path;
use crate::errors::{PipelineError, Result};
use crate::schemas::{Availability, Category, Intent, Step};

/// The branch a set of answers takes through the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub category: Category,
    pub intent: Intent,
    pub availability: Availability,
    pub steps: Vec<Step>,
}

/// Resolve the step path for the given answers
pub fn resolve(category: &str, intent: &str, availability: &str) -> Result<PathReport> {
    let category: Category = category.parse().map_err(PipelineError::SchemaValidation)?;
    let intent: Intent = intent.parse().map_err(PipelineError::SchemaValidation)?;
    let availability: Availability = availability
        .parse()
        .map_err(PipelineError::SchemaValidation)?;

    Ok(PathReport {
        category,
        intent,
        availability,
        steps: expected_path(category, intent, availability),
    })
}

/// Print the step path for the given answers
pub fn run(category: &str, intent: &str, availability: &str, json: bool) -> Result<()> {
    let report = resolve(category, intent, availability)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| PipelineError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!(
        "{} / {} / {} ({} steps)",
        report.category,
        report.intent,
        report.availability,
        report.steps.len()
    );
    for (index, step) in report.steps.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, step);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_job_search() {
        let report = resolve("job", "search", "now").unwrap();
        assert_eq!(report.steps.first(), Some(&Step::Category));
        assert_eq!(report.steps.last(), Some(&Step::Complete));
        assert!(!report.steps.contains(&Step::Details));
        assert!(!report.steps.contains(&Step::Layout));
    }

    #[test]
    fn test_resolve_property_offer_future() {
        let report = resolve("property", "offer", "future").unwrap();
        assert!(report.steps.contains(&Step::AvailabilityDetails));
        assert!(report.steps.contains(&Step::TransactionType));
        assert!(!report.steps.contains(&Step::EmploymentType));
    }

    #[test]
    fn test_resolve_unknown_category() {
        let err = resolve("vehicle", "offer", "now").unwrap_err();
        assert_eq!(err.code(), "SCHEMA_VALIDATION");
        assert!(err.to_string().contains("vehicle"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = resolve("property", "search", "now").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["category"], "property");
        assert_eq!(json["steps"][2], "transactionType");
    }
}
