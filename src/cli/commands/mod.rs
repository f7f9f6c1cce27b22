//! CLI command implementations

pub mod path;
pub mod replay;
