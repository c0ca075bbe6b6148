//! `tl-sim` — the engine-facing side of tick logging.
//!
//! A deliberately small controller: it owns active runs, advances them one
//! tick at a time and fans each tick-completion out to the listeners
//! registered for that run.
//!
//! ```text
//! step(sim_id):
//!   ① tick = current + 1
//!   ② model.advance(tick)
//!   ③ for listener in listeners[sim_id]:
//!        listener.tick_completed(sim_id, tick, &runs)   // runs: SnapshotSource
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tl_sim::{NoopListener, SimController};
//!
//! let mut ctl = SimController::new();
//! ctl.start_run(id, Box::new(model))?;
//! ctl.add_listener(id, Box::new(NoopListener))?;
//! ctl.run_ticks(id, 24)?;
//! ctl.end_run(id)?;
//! ```

pub mod controller;
pub mod error;
pub mod listener;
pub mod model;


pub use controller::{RunTable, SimController};
pub use error::{SimError, SimResult};
pub use listener::{NoopListener, SnapshotSource, TickListener};
pub use model::SimModel;
