//! Replay command - Drive a wizard session from a script of events

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;

use crate::domain::{progress, Progress};
use crate::errors::{PipelineError, Result};
use crate::fs;
use crate::schemas::{
    PipelineConfig, PipelineEvent, PipelineState, ReplayScript, SubmitBehavior, SubmitMode,
    SubmitPayload,
};
use crate::session::{PipelineSession, SessionOptions, StepChange, SubmitOutcome, Submitter};

/// An event the session refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEvent {
    /// Position of the event in the script
    pub index: usize,
    pub event: &'static str,
    pub reason: String,
}

/// Result of one DETAILS_READY in the script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitRecord {
    pub index: usize,
    pub outcome: SubmitOutcome,
}

/// Everything that happened during a replay
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub steps: Vec<StepChange>,
    pub rejected: Vec<RejectedEvent>,
    pub submits: Vec<SubmitRecord>,
    pub final_state: PipelineState,
    pub progress: Progress,
}

/// Build a submitter that answers the way the script asks
fn scripted_submitter(behavior: SubmitBehavior) -> impl Submitter {
    move |payload: SubmitPayload| {
        let behavior = behavior.clone();
        async move {
            tracing::debug!(category = ?payload.category, delay_ms = behavior.delay_ms, "scripted submit");
            if behavior.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(behavior.delay_ms)).await;
            }
            match behavior.mode {
                SubmitMode::Accept => Ok(()),
                SubmitMode::Reject => Err(behavior
                    .message
                    .unwrap_or_else(|| "submission rejected".to_string())),
            }
        }
    }
}

/// Run a script against a fresh session.
///
/// Rejected events are recorded and the replay carries on with the next
/// event. Any other error aborts the replay.
pub async fn run_script(script: &ReplayScript, config: PipelineConfig) -> Result<ReplayReport> {
    let changes: Arc<Mutex<Vec<StepChange>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = changes.clone();

    let options = SessionOptions {
        config,
        on_close: Some(Arc::new(|| tracing::info!("wizard closed"))),
        on_step_change: Some(Arc::new(move |change: &StepChange| {
            if let Ok(mut steps) = recorder.lock() {
                steps.push(change.clone());
            }
        })),
    };
    let session = PipelineSession::new(scripted_submitter(script.submit.clone()), options);

    let mut rejected = Vec::new();
    let mut submits = Vec::new();

    for (index, event) in script.events.iter().enumerate() {
        let result = match event {
            PipelineEvent::DetailsReady => session.details_ready().await.map(|outcome| {
                submits.push(SubmitRecord { index, outcome });
            }),
            PipelineEvent::Reset => session.reset().await.map(|_| ()),
            other => session.dispatch(other.clone()).await.map(|_| ()),
        };

        match result {
            Ok(()) => {}
            Err(PipelineError::TransitionRejected(reason)) => rejected.push(RejectedEvent {
                index,
                event: event.name(),
                reason,
            }),
            Err(e) => return Err(e),
        }
    }

    let final_state = session.state().await;
    let steps = changes
        .lock()
        .map(|steps| steps.clone())
        .unwrap_or_default();

    Ok(ReplayReport {
        steps,
        rejected,
        submits,
        progress: progress(&final_state),
        final_state,
    })
}

fn describe(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Submitted => "submitted".to_string(),
        SubmitOutcome::Failed { error } => format!("failed ({})", error),
        SubmitOutcome::Ignored => "ignored".to_string(),
        SubmitOutcome::Stale => "stale".to_string(),
    }
}

fn print_report(report: &ReplayReport) {
    for change in &report.steps {
        println!("{} -> {} ({})", change.from, change.to, change.event);
    }
    for rejected in &report.rejected {
        println!("rejected #{} {}: {}", rejected.index, rejected.event, rejected.reason);
    }
    for submit in &report.submits {
        println!("submit #{}: {}", submit.index, describe(&submit.outcome));
    }

    let total = report
        .progress
        .total
        .map(|t| t.to_string())
        .unwrap_or_else(|| "?".to_string());
    println!(
        "final step: {} ({}/{})",
        report.final_state.step, report.progress.position, total
    );
    if let Some(ref error) = report.final_state.error {
        println!("last error: {}", error);
    }
}

/// Replay a script file and print the report
pub async fn run(
    script_path: &Path,
    config: PipelineConfig,
    json: bool,
    output: Option<&Path>,
) -> Result<()> {
    let script = fs::read_script(script_path)?;
    tracing::info!(
        script = %script_path.display(),
        events = script.events.len(),
        "replaying wizard session"
    );

    let report = run_script(&script, config).await?;

    if let Some(path) = output {
        fs::write_json(path, &report).map_err(|e| {
            PipelineError::wrap(e, format!("Failed to write replay report {}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "replay report written");
    }

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| PipelineError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        print_report(&report);
    }

    Ok(())
}
