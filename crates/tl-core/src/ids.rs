//! Strongly typed simulation run identifier.
//!
//! The inner integer is `pub` so allocators can do arithmetic on it directly,
//! but everything that names a run on disk goes through
//! [`SimulationRunId::dir_name`] so the `sim_<n>` convention lives in one
//! place.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of every run directory under the log root.
pub const RUN_DIR_PREFIX: &str = "sim_";

/// Identifier of one simulation run.
///
/// Immutable once allocated.  `Copy + Ord + Hash` so it can key maps and
/// sorted collections without ceremony.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationRunId(pub u64);

impl SimulationRunId {
    /// Sentinel meaning "no run".  [`checked_next`][Self::checked_next]
    /// never produces it, so allocators cannot hand it out.
    pub const INVALID: SimulationRunId = SimulationRunId(u64::MAX);

    /// The run that follows this one, or `None` once the ID space is used up
    /// (the successor would be `INVALID` or overflow).
    #[inline]
    pub fn checked_next(self) -> Option<SimulationRunId> {
        self.0
            .checked_add(1)
            .filter(|&n| n != Self::INVALID.0)
            .map(SimulationRunId)
    }

    /// Directory name for this run, e.g. `sim_7`.
    pub fn dir_name(self) -> String {
        format!("{RUN_DIR_PREFIX}{}", self.0)
    }

    /// Parse a directory name of the form `sim_<integer>`.
    ///
    /// Returns `None` for anything else, including `sim_` with an empty or
    /// non-numeric suffix.
    pub fn from_dir_name(name: &str) -> Option<SimulationRunId> {
        name.strip_prefix(RUN_DIR_PREFIX)?
            .parse::<u64>()
            .ok()
            .map(SimulationRunId)
    }
}

impl fmt::Display for SimulationRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RUN_DIR_PREFIX}{}", self.0)
    }
}
