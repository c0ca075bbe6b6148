//! On-disk layout of a log root.
//!
//! ```text
//! <log_root>/sim_<id>/config.xml   — configuration text, overwritten per write
//! <log_root>/sim_<id>/ticks.jsonl  — one snapshot per line, append-only
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tl_core::SimulationRunId;

pub const CONFIG_FILE: &str = "config.xml";
pub const TICKS_FILE: &str = "ticks.jsonl";

/// `<log_root>/sim_<id>`.
pub fn run_dir(log_root: &Path, sim_id: SimulationRunId) -> PathBuf {
    log_root.join(sim_id.dir_name())
}

/// IDs of every immediate `sim_<n>` subdirectory of `log_root`, ascending.
///
/// Plain files and names that do not parse are skipped.  Symlinks to
/// directories count as directories.
pub fn run_ids_in(log_root: &Path) -> io::Result<Vec<SimulationRunId>> {
    let mut ids = Vec::new();
    for entry in std::fs::read_dir(log_root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(id) = entry.file_name().to_str().and_then(SimulationRunId::from_dir_name) {
            ids.push(id);
        }
    }
    ids.sort_unstable();
    Ok(ids)
}
