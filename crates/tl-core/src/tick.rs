//! Per-run tick numbering.
//!
//! Ticks are counted per run.  The engine supplies the number with every
//! tick-completion notification; the logging side never validates it, it only
//! preserves arrival order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tick counter within one simulation run.
///
/// Stored as `u64`: even at thousands of ticks per second a run cannot
/// overflow it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickNumber(pub u64);

impl TickNumber {
    pub const ZERO: TickNumber = TickNumber(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> TickNumber {
        TickNumber(self.0 + 1)
    }
}

impl std::ops::Add<u64> for TickNumber {
    type Output = TickNumber;
    #[inline]
    fn add(self, rhs: u64) -> TickNumber {
        TickNumber(self.0 + rhs)
    }
}

impl fmt::Display for TickNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
