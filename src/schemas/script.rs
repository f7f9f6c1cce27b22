//! Replay script schema - a recorded wizard session driven from a file

use serde::{Deserialize, Serialize};

use super::event::PipelineEvent;

/// How the simulated submit function answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// Submit succeeds
    #[default]
    Accept,
    /// Submit fails with `message`
    Reject,
}

/// Behavior of the submit function during a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBehavior {
    #[serde(default)]
    pub mode: SubmitMode,

    /// Error reported when mode is reject
    #[serde(default)]
    pub message: Option<String>,

    /// Simulated latency of the submit call
    #[serde(default)]
    pub delay_ms: u64,
}

impl Default for SubmitBehavior {
    fn default() -> Self {
        SubmitBehavior {
            mode: SubmitMode::Accept,
            message: None,
            delay_ms: 0,
        }
    }
}

/// A scripted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub submit: SubmitBehavior,

    /// Events in dispatch order
    pub events: Vec<PipelineEvent>,
}
