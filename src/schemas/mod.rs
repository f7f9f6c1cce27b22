//! Schema types for the listing pipeline
//!
//! All types serialize to the same JSON shape the web wizard uses.

mod answers;
mod config;
mod event;
mod payload;
mod script;
mod state;

pub use answers::{
    Availability, AvailabilityDetails, Category, DurationUnit, EmploymentType, Intent,
    TransactionType,
};
pub use config::PipelineConfig;
pub use event::PipelineEvent;
pub use payload::SubmitPayload;
pub use script::{ReplayScript, SubmitBehavior, SubmitMode};
pub use state::{Checkpoint, PipelineState, Step};
