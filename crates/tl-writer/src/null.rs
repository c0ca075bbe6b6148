//! A no-op tick writer.

use tl_core::{SimulationRunId, Snapshot, TickNumber};

use crate::{TickLogResult, TickWriter};

/// A [`TickWriter`] that discards everything and never fails.
///
/// Selected when durable logging is off, so callers always hold a writer and
/// never branch on whether logging is enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTickWriter;

impl TickWriter for NullTickWriter {
    fn open(&mut self, _sim_id: SimulationRunId) -> TickLogResult<()> {
        Ok(())
    }

    fn write_config(&mut self, _sim_id: SimulationRunId, _config_text: &str) -> TickLogResult<()> {
        Ok(())
    }

    fn write_tick(
        &mut self,
        _sim_id:   SimulationRunId,
        _tick:     TickNumber,
        _snapshot: &Snapshot,
    ) -> TickLogResult<()> {
        Ok(())
    }

    fn close(&mut self) -> TickLogResult<()> {
        Ok(())
    }
}
