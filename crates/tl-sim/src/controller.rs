//! `SimController` — owns active runs and drives their tick loop.

use std::collections::{BTreeMap, HashMap};

use tl_core::{SimulationRunId, Snapshot, TickNumber};

use crate::{SimError, SimModel, SimResult, SnapshotSource, TickListener};

struct ActiveRun {
    model: Box<dyn SimModel>,
    tick:  TickNumber,
}

/// Every active run, keyed by ID.  Serves as the [`SnapshotSource`] handed to
/// listeners.
#[derive(Default)]
pub struct RunTable {
    runs: BTreeMap<SimulationRunId, ActiveRun>,
}

impl RunTable {
    /// Current tick of `sim_id`, or `None` if the run is not active.
    pub fn current_tick(&self, sim_id: SimulationRunId) -> Option<TickNumber> {
        self.runs.get(&sim_id).map(|r| r.tick)
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl SnapshotSource for RunTable {
    fn generate_snapshot(&self, sim_id: SimulationRunId) -> SimResult<Snapshot> {
        self.runs
            .get(&sim_id)
            .ok_or(SimError::UnknownRun(sim_id))?
            .model
            .snapshot()
    }
}

/// Runs simulations and notifies per-run listeners after every tick.
///
/// Listeners are registered per run, so a listener bound to one run never
/// observes another run's ticks.  Notifications are delivered synchronously,
/// in registration order, on the thread calling [`step`][Self::step].
///
/// Tick numbering starts at 1: the first `step` moves a run from `T0` to `T1`.
#[derive(Default)]
pub struct SimController {
    runs:      RunTable,
    listeners: HashMap<SimulationRunId, Vec<Box<dyn TickListener>>>,
}

impl SimController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new run at tick 0.
    pub fn start_run(&mut self, sim_id: SimulationRunId, model: Box<dyn SimModel>) -> SimResult<()> {
        if self.runs.runs.contains_key(&sim_id) {
            return Err(SimError::DuplicateRun(sim_id));
        }
        self.runs.runs.insert(sim_id, ActiveRun { model, tick: TickNumber::ZERO });
        log::info!("{sim_id}: run started");
        Ok(())
    }

    /// Attach a listener to an active run.
    pub fn add_listener(
        &mut self,
        sim_id:   SimulationRunId,
        listener: Box<dyn TickListener>,
    ) -> SimResult<()> {
        if !self.runs.runs.contains_key(&sim_id) {
            return Err(SimError::UnknownRun(sim_id));
        }
        self.listeners.entry(sim_id).or_default().push(listener);
        Ok(())
    }

    /// Advance `sim_id` by one tick, then notify its listeners.
    ///
    /// A model error aborts the step before any listener is called.
    pub fn step(&mut self, sim_id: SimulationRunId) -> SimResult<TickNumber> {
        let run = self
            .runs
            .runs
            .get_mut(&sim_id)
            .ok_or(SimError::UnknownRun(sim_id))?;
        let tick = run.tick.next();
        run.model.advance(tick)?;
        run.tick = tick;

        // Disjoint field borrows: listeners mutably, the run table shared.
        if let Some(listeners) = self.listeners.get_mut(&sim_id) {
            for listener in listeners.iter_mut() {
                listener.tick_completed(sim_id, tick, &self.runs);
            }
        }
        Ok(tick)
    }

    /// Step `sim_id` `n` times.  Returns the final tick.
    pub fn run_ticks(&mut self, sim_id: SimulationRunId, n: u64) -> SimResult<TickNumber> {
        let mut tick = self.runs.current_tick(sim_id).ok_or(SimError::UnknownRun(sim_id))?;
        for _ in 0..n {
            tick = self.step(sim_id)?;
        }
        Ok(tick)
    }

    /// Stop a run: tell its listeners, then drop them and the model.
    ///
    /// Returns the tick the run ended on.
    pub fn end_run(&mut self, sim_id: SimulationRunId) -> SimResult<TickNumber> {
        let run = self.runs.runs.remove(&sim_id).ok_or(SimError::UnknownRun(sim_id))?;
        if let Some(mut listeners) = self.listeners.remove(&sim_id) {
            for listener in listeners.iter_mut() {
                listener.run_ended(sim_id, run.tick);
            }
        }
        log::info!("{sim_id}: run ended at {}", run.tick);
        Ok(run.tick)
    }

    /// Read-only view of active runs (also the snapshot source).
    pub fn runs(&self) -> &RunTable {
        &self.runs
    }
}
