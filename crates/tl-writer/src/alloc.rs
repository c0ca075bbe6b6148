//! Run ID allocation.
//!
//! # Numbering
//!
//! With persistence **disabled** IDs come from a process-wide counter:
//! 1, 2, 3, … for the lifetime of the process.
//!
//! With persistence **enabled** the log root is scanned for `sim_<n>`
//! directories so IDs keep increasing across restarts:
//!
//! | Log root state                | Result  |
//! |-------------------------------|---------|
//! | absent (created by the call)  | `1`     |
//! | present, no `sim_<n>` entries | `0`     |
//! | present, max entry `sim_M`    | `M + 1` |
//!
//! `u64::MAX` is the `INVALID` sentinel and is never handed out: once the
//! next ID would reach it, allocation fails with `Allocation`.
//!
//! The absent/empty split (1 vs 0) is kept exactly as existing log roots
//! were numbered, so restarts against old roots do not shift.  The result
//! then resets the counter, so a later disabled-mode call continues the same
//! sequence instead of restarting at 1.
//!
//! # Races
//!
//! Scan-then-use is not atomic.  Scans are serialized by a process-wide lock,
//! which makes concurrent allocations within one process safe only if each
//! caller creates its run directory before the next scan.  Two *processes*
//! sharing a log root can still receive the same ID from [`allocate`].
//! [`allocate_claimed`] closes that gap by creating the directory as part of
//! the allocation and moving on to the next integer if it already exists.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tl_core::SimulationRunId;

use crate::layout::{run_dir, run_ids_in};
use crate::{TickLogError, TickLogResult};

static ALLOCATOR: IdAllocator = IdAllocator::new();

/// Allocate the next run ID from the process-wide allocator.
pub fn allocate(log_root: &Path, persistence_enabled: bool) -> TickLogResult<SimulationRunId> {
    ALLOCATOR.allocate(log_root, persistence_enabled)
}

/// Allocate the next run ID and claim its directory on disk.
pub fn allocate_claimed(log_root: &Path) -> TickLogResult<SimulationRunId> {
    ALLOCATOR.allocate_claimed(log_root)
}

/// Counter plus scan lock.  The process uses one `static` instance through
/// [`allocate`]; independent instances exist for isolation in tests.
pub struct IdAllocator {
    counter:   AtomicU64,
    scan_lock: Mutex<()>,
}

impl IdAllocator {
    pub const fn new() -> Self {
        Self {
            counter:   AtomicU64::new(0),
            scan_lock: Mutex::new(()),
        }
    }

    pub fn allocate(&self, log_root: &Path, persistence_enabled: bool) -> TickLogResult<SimulationRunId> {
        if !persistence_enabled {
            let prev = self
                .counter
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                    SimulationRunId(n).checked_next().map(|id| id.0)
                })
                .map_err(|n| exhausted(log_root, SimulationRunId(n)))?;
            let id = SimulationRunId(prev + 1);
            log::debug!("allocated {id} (in-memory)");
            return Ok(id);
        }

        // The guarded value is `()`: a poisoned lock carries no broken state.
        let _guard = self.scan_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let id = scan_next_id(log_root)?;
        self.counter.store(id.0, Ordering::SeqCst);
        log::debug!("allocated {id} from {}", log_root.display());
        Ok(id)
    }

    /// Like `allocate(log_root, true)`, but creates `sim_<id>` before
    /// returning, skipping forward past directories another process created
    /// in the meantime.
    pub fn allocate_claimed(&self, log_root: &Path) -> TickLogResult<SimulationRunId> {
        let _guard = self.scan_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut id = scan_next_id(log_root)?;
        loop {
            match std::fs::create_dir(run_dir(log_root, id)) {
                Ok(()) => break,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    let next = id.checked_next().ok_or_else(|| exhausted(log_root, id))?;
                    log::debug!("{id} already claimed, trying {next}");
                    id = next;
                }
                Err(source) => {
                    return Err(TickLogError::Allocation { path: run_dir(log_root, id), source });
                }
            }
        }
        self.counter.store(id.0, Ordering::SeqCst);
        log::debug!("claimed {id} under {}", log_root.display());
        Ok(id)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

fn scan_next_id(log_root: &Path) -> TickLogResult<SimulationRunId> {
    let alloc_err = |source| TickLogError::Allocation { path: log_root.to_path_buf(), source };

    if !log_root.exists() {
        std::fs::create_dir_all(log_root).map_err(alloc_err)?;
        return Ok(SimulationRunId(1));
    }
    let ids = run_ids_in(log_root).map_err(alloc_err)?;
    match ids.last() {
        None => Ok(SimulationRunId(0)),
        Some(&max) => max.checked_next().ok_or_else(|| exhausted(log_root, max)),
    }
}

/// No ID follows `last` without reaching the `INVALID` sentinel.
fn exhausted(log_root: &Path, last: SimulationRunId) -> TickLogError {
    TickLogError::Allocation {
        path:   log_root.to_path_buf(),
        source: std::io::Error::other(format!("run IDs exhausted after {last}")),
    }
}
