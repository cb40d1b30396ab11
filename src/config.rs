//! Project-level configuration support
//!
//! Loads per-project defaults from a `wordshift.toml` in the working
//! directory. Explicit CLI flags always win over file defaults; configuration
//! travels as a plain value, never as process-wide state.
//!
//! # Configuration Format
//!
//! ```toml
//! # wordshift.toml
//!
//! [defaults]
//! format = "csv"
//! top = 30
//! min_count = 5
//! field = "text"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "wordshift.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// CLI flag defaults; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    pub format: Option<String>,
    pub top: Option<usize>,
    pub min_count: Option<u64>,
    pub field: Option<String>,
}

/// Load `wordshift.toml` from `dir` if present; absent file means defaults,
/// malformed file is a hard error naming the path.
pub fn load_project_config(dir: &Path) -> Result<ProjectConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: ProjectConfig =
        toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))?;

    debug!(path = %path.display(), "loaded project config");
    Ok(config)
}
