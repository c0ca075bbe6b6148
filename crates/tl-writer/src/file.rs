//! JSON-lines file backend.
//!
//! Writes into `<log_root>/sim_<id>/`:
//! - `config.xml`  — the run's configuration text, replaced on every write
//! - `ticks.jsonl` — one snapshot per line, appended and flushed per tick
//!
//! A tick either lands as one complete line or not at all: a failed append
//! is truncated back to the previous end of file, and nothing is buffered
//! across calls for a later write to pick up.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use tl_core::{SimulationRunId, Snapshot, TickNumber};

use crate::layout::{run_dir, CONFIG_FILE, TICKS_FILE};
use crate::writer::TickWriter;
use crate::{TickLogError, TickLogResult};

struct OpenRun {
    sim_id:     SimulationRunId,
    ticks_path: PathBuf,
    ticks:      File,
}

/// Durable [`TickWriter`]: one directory per run under a log root.
///
/// Holds the tick stream open between `open` and `close`.  Every
/// `write_tick` is flushed before returning, so a crash loses at most the
/// record being written.  Nothing is retried; every I/O failure is returned
/// to the caller.
pub struct FileTickWriter {
    log_root: PathBuf,
    run:      Option<OpenRun>,
}

impl FileTickWriter {
    /// A writer rooted at `log_root`.  Nothing touches the disk until `open`
    /// or `write_config`.
    pub fn new(log_root: impl Into<PathBuf>) -> Self {
        Self { log_root: log_root.into(), run: None }
    }

    /// The run currently open, if any.
    pub fn open_run(&self) -> Option<SimulationRunId> {
        self.run.as_ref().map(|r| r.sim_id)
    }

    fn ensure_run_dir(&self, sim_id: SimulationRunId) -> TickLogResult<PathBuf> {
        let dir = run_dir(&self.log_root, sim_id);
        std::fs::create_dir_all(&dir)
            .map_err(|source| TickLogError::Write { path: dir.clone(), source })?;
        Ok(dir)
    }
}

impl TickWriter for FileTickWriter {
    fn open(&mut self, sim_id: SimulationRunId) -> TickLogResult<()> {
        if let Some(prev) = self.run.take() {
            log::warn!("{}: opened while still open; {} dropped without close", sim_id, prev.sim_id);
        }

        let ticks_path = self.ensure_run_dir(sim_id)?.join(TICKS_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&ticks_path)
            .map_err(|source| TickLogError::Write { path: ticks_path.clone(), source })?;

        log::debug!("{sim_id}: appending ticks to {}", ticks_path.display());
        self.run = Some(OpenRun { sim_id, ticks_path, ticks: file });
        Ok(())
    }

    fn write_config(&mut self, sim_id: SimulationRunId, config_text: &str) -> TickLogResult<()> {
        let path = self.ensure_run_dir(sim_id)?.join(CONFIG_FILE);
        std::fs::write(&path, config_text)
            .map_err(|source| TickLogError::Write { path: path.clone(), source })?;
        log::debug!("{sim_id}: wrote {} bytes of config", config_text.len());
        Ok(())
    }

    fn write_tick(
        &mut self,
        sim_id:   SimulationRunId,
        tick:     TickNumber,
        snapshot: &Snapshot,
    ) -> TickLogResult<()> {
        let run = self.run.as_mut().ok_or(TickLogError::NotOpen)?;
        if run.sim_id != sim_id {
            return Err(TickLogError::RunMismatch { open: run.sim_id, requested: sim_id });
        }

        let line = serde_json::to_string(snapshot)?;
        append_line(&mut run.ticks, &line)
            .map_err(|source| TickLogError::Write { path: run.ticks_path.clone(), source })?;
        log::trace!("{sim_id}: {tick} logged ({} bytes)", line.len());
        Ok(())
    }

    fn close(&mut self) -> TickLogResult<()> {
        let Some(mut run) = self.run.take() else {
            return Ok(());
        };
        run.ticks
            .flush()
            .map_err(|source| TickLogError::Write { path: run.ticks_path.clone(), source })?;
        log::debug!("{}: tick stream closed", run.sim_id);
        Ok(())
    }
}

/// An append-only byte sink whose tail can be cut back after a failed write.
pub(crate) trait TickSink: Write {
    fn end(&self) -> io::Result<u64>;
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl TickSink for File {
    fn end(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Append `line` plus `\n` as a single write.  On failure the sink is cut
/// back to its previous length so no partial record survives.
pub(crate) fn append_line<S: TickSink>(out: &mut S, line: &str) -> io::Result<()> {
    let before = out.end()?;
    let mut record = Vec::with_capacity(line.len() + 1);
    record.extend_from_slice(line.as_bytes());
    record.push(b'\n');

    if let Err(e) = out.write_all(&record).and_then(|()| out.flush()) {
        if let Err(undo) = out.truncate(before) {
            log::warn!("could not roll back partial tick record: {undo}");
        }
        return Err(e);
    }
    Ok(())
}
