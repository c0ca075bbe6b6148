//! The `TickWriter` trait implemented by the file and no-op writers.

use tl_core::{SimulationRunId, Snapshot, TickLogConfig, TickNumber};

use crate::{FileTickWriter, NullTickWriter, TickLogResult};

/// Lifecycle for persisting one run's configuration and tick stream.
///
/// `unopened → open → closed`.  Writing outside the open state is a usage
/// error for writers that hold resources; [`NullTickWriter`] accepts every
/// call in any state.
pub trait TickWriter {
    /// Prepare to accept writes for `sim_id`.
    ///
    /// Calling `open` again re-points the writer at the new run.  Callers
    /// should `close` the previous run first.
    fn open(&mut self, sim_id: SimulationRunId) -> TickLogResult<()>;

    /// Store the run's configuration text, replacing any earlier copy.
    fn write_config(&mut self, sim_id: SimulationRunId, config_text: &str) -> TickLogResult<()>;

    /// Append one tick record.
    fn write_tick(
        &mut self,
        sim_id:   SimulationRunId,
        tick:     TickNumber,
        snapshot: &Snapshot,
    ) -> TickLogResult<()>;

    /// Release held resources.
    ///
    /// Idempotent — safe to call more than once.
    fn close(&mut self) -> TickLogResult<()>;
}

impl<W: TickWriter + ?Sized> TickWriter for Box<W> {
    fn open(&mut self, sim_id: SimulationRunId) -> TickLogResult<()> {
        (**self).open(sim_id)
    }

    fn write_config(&mut self, sim_id: SimulationRunId, config_text: &str) -> TickLogResult<()> {
        (**self).write_config(sim_id, config_text)
    }

    fn write_tick(
        &mut self,
        sim_id:   SimulationRunId,
        tick:     TickNumber,
        snapshot: &Snapshot,
    ) -> TickLogResult<()> {
        (**self).write_tick(sim_id, tick, snapshot)
    }

    fn close(&mut self) -> TickLogResult<()> {
        (**self).close()
    }
}

/// Pick the writer for this process: file-backed under `config.log_root`
/// when `write_ticks` is on, otherwise the no-op writer.
pub fn select_writer(config: &TickLogConfig) -> Box<dyn TickWriter + Send> {
    if config.write_ticks {
        log::info!("tick logging enabled under {}", config.log_root.display());
        Box::new(FileTickWriter::new(config.log_root.clone()))
    } else {
        log::info!("tick logging disabled");
        Box::new(NullTickWriter)
    }
}
