//! Config schema - Configuration for a pipeline session

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How long a submit call may take before it is reported as failed
    #[serde(default = "default_submit_timeout_ms")]
    pub submit_timeout_ms: u64,

    /// Whether the step observer is notified of step changes
    #[serde(default = "default_emit_step_changes")]
    pub emit_step_changes: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_submit_timeout_ms() -> u64 {
    30_000
}

fn default_emit_step_changes() -> bool {
    true
}

impl PipelineConfig {
    /// Submit timeout as a duration
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    /// Return a new config with the given submit timeout
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            schema_version: 1,
            submit_timeout_ms: 30_000,
            emit_step_changes: true,
        }
    }
}
