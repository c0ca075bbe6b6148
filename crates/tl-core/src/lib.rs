//! `tl-core` — shared types for the tick-logging workspace.
//!
//! Every other `tl-*` crate depends on this one.  It has no `tl-*`
//! dependencies and keeps external ones to `serde`, `serde_json` and
//! `thiserror`.
//!
//! # What lives here
//!
//! | Module         | Contents                                    |
//! |----------------|---------------------------------------------|
//! | [`ids`]        | `SimulationRunId`, `sim_<n>` naming         |
//! | [`tick`]       | `TickNumber`                                |
//! | [`snapshot`]   | `Snapshot` (opaque nested key-value state)  |
//! | [`config`]     | `TickLogConfig` with env overrides          |
//! | [`error`]      | `CoreError`, `CoreResult`                   |

pub mod config;
pub mod error;
pub mod ids;
pub mod snapshot;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TickLogConfig;
pub use error::{CoreError, CoreResult};
pub use ids::SimulationRunId;
pub use snapshot::Snapshot;
pub use tick::TickNumber;
