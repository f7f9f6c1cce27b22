//! Wizard session
//!
//! Owns the pipeline state for one wizard run and exposes one method per
//! event. The submit call is the only asynchronous operation.

mod dispatcher;
mod submit;


pub use dispatcher::{
    CloseCallback, PipelineSession, SessionOptions, StepChange, StepObserver,
};
pub use submit::{SubmitOutcome, Submitter};
