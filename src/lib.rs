//! Layera listing pipeline - the state machine behind the "create listing" wizard
//!
//! This library provides:
//! - Schema definitions for answers, events, state and config
//! - Domain logic for step transitions, back navigation and derived predicates
//! - An async session that owns the state and runs the submit call
//! - File system utilities for reading/writing JSON
//! - The `layera-pipeline` CLI for inspecting paths and replaying scripts

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod session;

// Re-export commonly used types
pub use domain::{apply_event, reduce, Capabilities, TransitionResult};
pub use errors::{PipelineError, Result};
pub use schemas::{PipelineConfig, PipelineEvent, PipelineState, Step};
pub use session::{PipelineSession, SessionOptions, SubmitOutcome, Submitter};
