//! Clap-free settings for the fix pipeline.

use camino::Utf8PathBuf;

/// Settings for [`run_fix`](crate::pipeline::run_fix).
#[derive(Debug, Clone)]
pub struct FixSettings {
    /// Root against which analyzer-reported paths are resolved.
    pub repo_root: Utf8PathBuf,

    /// When set, nothing is written; the pipeline produces a unified diff
    /// preview instead.
    pub dry_run: bool,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            repo_root: Utf8PathBuf::from("."),
            dry_run: false,
        }
    }
}
