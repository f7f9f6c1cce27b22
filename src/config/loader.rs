//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{PipelineError, Result};
use crate::fs;
use crate::schemas::PipelineConfig;

/// Load configuration, falling back to defaults.
///
/// An explicit path must exist. Without one, `.layera/pipeline.json` under
/// `cwd` is read if present, otherwise default configuration is returned.
///
/// # Arguments
/// * `explicit` - Path passed with `--config`, if any
/// * `cwd` - Working directory used to find the default config file
///
/// # Returns
/// The resolved configuration
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<PipelineConfig> {
    let config = match fs::resolve_config_path(explicit, cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading pipeline config");
            fs::read_config(&path)?
        }
        None => PipelineConfig::default(),
    };

    if config.submit_timeout_ms == 0 {
        return Err(PipelineError::ConfigError(
            "submit_timeout_ms must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}
