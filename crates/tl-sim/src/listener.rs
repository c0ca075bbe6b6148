//! Tick-completion hooks and the snapshot-producing collaborator.

use tl_core::{SimulationRunId, Snapshot, TickNumber};

use crate::SimResult;

/// Produces the full state snapshot of a run on request.
///
/// Handed to every [`TickListener`] alongside the notification so that a
/// listener never needs to hold a borrow of the engine between ticks.
pub trait SnapshotSource {
    fn generate_snapshot(&self, sim_id: SimulationRunId) -> SimResult<Snapshot>;
}

/// Callbacks invoked by [`SimController`][crate::SimController] for a run.
///
/// Methods return nothing: a listener is a passenger on the tick loop and must
/// not be able to stop it.  Implementors that can fail are expected to handle
/// their own errors.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl TickListener for ProgressPrinter {
///     fn tick_completed(&mut self, sim_id: SimulationRunId, tick: TickNumber, _: &dyn SnapshotSource) {
///         if tick.0 % self.interval == 0 {
///             println!("{sim_id}: reached {tick}");
///         }
///     }
/// }
/// ```
pub trait TickListener {
    /// Called after the run has advanced to `tick`.
    fn tick_completed(
        &mut self,
        sim_id: SimulationRunId,
        tick:   TickNumber,
        source: &dyn SnapshotSource,
    );

    /// Called once when the run is ended through
    /// [`SimController::end_run`][crate::SimController::end_run].
    fn run_ended(&mut self, _sim_id: SimulationRunId, _final_tick: TickNumber) {}
}

/// A [`TickListener`] that does nothing.
pub struct NoopListener;

impl TickListener for NoopListener {
    fn tick_completed(&mut self, _: SimulationRunId, _: TickNumber, _: &dyn SnapshotSource) {}
}
