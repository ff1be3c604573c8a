use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::error;

/// Job status configuration (`[status]` in config.toml).
///
/// `calculator` maps a job-type label to the key of the calculator that
/// evaluates its status. Labels may arrive with arbitrary casing, spacing,
/// or hyphens; they are normalized before any lookup, so
/// `"soMe-TeSt job" = "errorOnLastJobFailed"` applies to the job type
/// `"Some Test Job"`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct JobStatusConfig {
    /// Per-job-type calculator overrides: job-type label → calculator key.
    pub calculator: HashMap<String, String>,
}

/// Top-level config file shape; only the `[status]` section matters here.
#[derive(Deserialize, Default)]
struct TomlConfig {
    #[serde(default)]
    status: JobStatusConfig,
}

impl JobStatusConfig {
    /// Load the `[status]` section from a TOML config file.
    ///
    /// A missing file yields the defaults (no overrides). A file that fails
    /// to parse is logged and also yields the defaults — a broken override
    /// map must not keep health checks from coming up.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        match toml::from_str::<TomlConfig>(&contents) {
            Ok(config) => config.status,
            Err(e) => {
                error!(path = %path.display(), err = %e, "failed to parse config file, using defaults");
                Self::default()
            }
        }
    }
}
