//! Tick-logging configuration.
//!
//! Loaded from a JSON file by the application crate, then overlaid with
//! environment variables so a container can flip logging on without a new
//! file:
//!
//! | Variable                | Field                   |
//! |-------------------------|-------------------------|
//! | `BIOSIM_LOG_ROOT`       | `log_root`              |
//! | `BIOSIM_WRITE_TICKS`    | `write_ticks`           |
//! | `BIOSIM_CLAIM_RUN_DIRS` | `claim_run_directories` |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

pub const ENV_LOG_ROOT: &str = "BIOSIM_LOG_ROOT";
pub const ENV_WRITE_TICKS: &str = "BIOSIM_WRITE_TICKS";
pub const ENV_CLAIM_RUN_DIRS: &str = "BIOSIM_CLAIM_RUN_DIRS";

/// Default directory holding every `sim_<id>` run directory.
pub const DEFAULT_LOG_ROOT: &str = "logs";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickLogConfig {
    /// Root directory for run directories.  Default: `logs`.
    pub log_root: PathBuf,

    /// Persist per-tick snapshots to disk.  When `false` the null writer is
    /// selected and run IDs come from the in-process counter only.
    pub write_ticks: bool,

    /// Claim each allocated ID by creating its run directory up front,
    /// retrying on collision.  Protects against two processes sharing a
    /// log root.
    pub claim_run_directories: bool,
}

impl Default for TickLogConfig {
    fn default() -> Self {
        Self {
            log_root:              PathBuf::from(DEFAULT_LOG_ROOT),
            write_ticks:           false,
            claim_run_directories: false,
        }
    }
}

impl TickLogConfig {
    /// Load from a JSON file.  Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Overlay values from the process environment.
    pub fn with_env_overrides(self) -> CoreResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    ///
    /// Split out from [`with_env_overrides`][Self::with_env_overrides] so
    /// callers (and tests) can supply variables without touching the real
    /// environment.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ENV_LOG_ROOT).filter(|s| !s.trim().is_empty()) {
            self.log_root = PathBuf::from(root);
        }
        if let Some(raw) = lookup(ENV_WRITE_TICKS) {
            self.write_ticks = parse_flag(ENV_WRITE_TICKS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CLAIM_RUN_DIRS) {
            self.claim_run_directories = parse_flag(ENV_CLAIM_RUN_DIRS, &raw)?;
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, raw: &str) -> CoreResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(CoreError::Config(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}
