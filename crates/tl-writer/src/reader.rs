//! Read a run directory back for analysis.

use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tl_core::{SimulationRunId, Snapshot};

use crate::layout::{run_dir, run_ids_in, CONFIG_FILE, TICKS_FILE};
use crate::{TickLogError, TickLogResult};

/// Everything recorded for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLog {
    pub sim_id: SimulationRunId,
    /// `None` if no configuration was ever written.
    pub config: Option<String>,
    /// One entry per logged tick, in file order.
    pub ticks:  Vec<Snapshot>,
}

/// Load `<log_root>/sim_<id>`.
///
/// A missing run directory is an error; missing files inside it are not.
pub fn read_run(log_root: &Path, sim_id: SimulationRunId) -> TickLogResult<RunLog> {
    let dir = run_dir(log_root, sim_id);
    if !dir.is_dir() {
        return Err(TickLogError::Read {
            path:   dir,
            source: std::io::Error::new(ErrorKind::NotFound, "no such run directory"),
        });
    }

    let config_path = dir.join(CONFIG_FILE);
    let config = match std::fs::read_to_string(&config_path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(source) => return Err(TickLogError::Read { path: config_path, source }),
    };

    let ticks_path = dir.join(TICKS_FILE);
    let ticks = if ticks_path.exists() { read_ticks(&ticks_path)? } else { Vec::new() };

    Ok(RunLog { sim_id, config, ticks })
}

/// Parse a `ticks.jsonl` file.  Blank lines are skipped.
pub fn read_ticks(path: &Path) -> TickLogResult<Vec<Snapshot>> {
    let read_err = |source| TickLogError::Read { path: path.to_path_buf(), source };
    let file = std::fs::File::open(path).map_err(read_err)?;

    let mut ticks = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(read_err)?;
        if line.trim().is_empty() {
            continue;
        }
        let snapshot: Snapshot = serde_json::from_str(&line).map_err(|source| TickLogError::Corrupt {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        ticks.push(snapshot);
    }
    Ok(ticks)
}

/// Every logged run under `log_root`, ascending.  An absent root has none.
pub fn list_runs(log_root: &Path) -> TickLogResult<Vec<SimulationRunId>> {
    if !log_root.exists() {
        return Ok(Vec::new());
    }
    run_ids_in(log_root).map_err(|source| TickLogError::Read { path: log_root.to_path_buf(), source })
}
