//! Path resolution utilities
//!
//! A config file is either given explicitly or discovered at
//! `<cwd>/.layera/pipeline.json`.

use std::path::{Path, PathBuf};

/// Directory holding project-level pipeline settings
pub fn get_config_dir(cwd: &Path) -> PathBuf {
    cwd.join(".layera")
}

/// Default location of the pipeline config file
pub fn get_default_config_path(cwd: &Path) -> PathBuf {
    get_config_dir(cwd).join("pipeline.json")
}

/// Resolve which config file to load, if any.
///
/// An explicit path always wins, even when it does not exist, so a typo is
/// reported instead of silently falling back to defaults. Without one, the
/// default path is used only if it exists.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default_path = get_default_config_path(cwd);
    default_path.exists().then_some(default_path)
}
