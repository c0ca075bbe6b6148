//! The per-run simulation model driven by the controller.

use tl_core::{Snapshot, TickNumber};

use crate::SimResult;

/// State and dynamics of one run.
///
/// The controller owns the clock; the model only reacts to it.  What goes
/// into the snapshot is entirely the model's business.
pub trait SimModel {
    /// Advance internal state to `tick`.
    fn advance(&mut self, tick: TickNumber) -> SimResult<()>;

    /// Full state as of the last `advance`.
    fn snapshot(&self) -> SimResult<Snapshot>;
}
