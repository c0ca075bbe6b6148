//! `TickWriterAdapter<W>` — bridges `TickListener` to a `TickWriter`.

use std::sync::{Arc, Mutex};

use tl_core::{SimulationRunId, TickNumber};
use tl_sim::{SnapshotSource, TickListener};

use crate::writer::TickWriter;
use crate::{TickLogError, TickLogResult};

/// A [`TickListener`] that pulls a snapshot for every completed tick and
/// appends it through a shared [`TickWriter`].
///
/// Failures stop here.  A snapshot that cannot be produced, or a write that
/// fails, is logged at `error` and counted; nothing reaches the engine and no
/// record is appended for that tick.
///
/// The writer is shared so the caller that opened it can also close it once
/// the run is over:
///
/// ```rust,ignore
/// let writer = Arc::new(Mutex::new(select_writer(&config)));
/// ctl.add_listener(id, Box::new(TickWriterAdapter::new(writer.clone())))?;
/// ctl.run_ticks(id, n)?;
/// ctl.end_run(id)?;
/// writer.lock().unwrap().close()?;
/// ```
pub struct TickWriterAdapter<W: TickWriter> {
    writer:   Arc<Mutex<W>>,
    failures: u64,
}

impl<W: TickWriter> TickWriterAdapter<W> {
    pub fn new(writer: Arc<Mutex<W>>) -> Self {
        Self { writer, failures: 0 }
    }

    /// Number of ticks dropped because of a snapshot or write failure.
    pub fn failure_count(&self) -> u64 {
        self.failures
    }

    fn record(
        &self,
        sim_id: SimulationRunId,
        tick:   TickNumber,
        source: &dyn SnapshotSource,
    ) -> TickLogResult<()> {
        let snapshot = source.generate_snapshot(sim_id)?;
        let mut writer = self.writer.lock().map_err(|_| TickLogError::WriterPoisoned)?;
        writer.write_tick(sim_id, tick, &snapshot)
    }
}

impl<W: TickWriter> TickListener for TickWriterAdapter<W> {
    fn tick_completed(
        &mut self,
        sim_id: SimulationRunId,
        tick:   TickNumber,
        source: &dyn SnapshotSource,
    ) {
        if let Err(e) = self.record(sim_id, tick, source) {
            self.failures += 1;
            log::error!("{sim_id}: {tick} not logged: {e}");
        }
    }

    fn run_ended(&mut self, sim_id: SimulationRunId, final_tick: TickNumber) {
        if self.failures > 0 {
            log::warn!("{sim_id}: ended at {final_tick} with {} unlogged ticks", self.failures);
        }
    }
}
