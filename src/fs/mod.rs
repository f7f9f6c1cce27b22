//! File system utilities
//!
//! Provides config path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, read_script, write_json};
pub use paths::{get_config_dir, get_default_config_path, resolve_config_path};
