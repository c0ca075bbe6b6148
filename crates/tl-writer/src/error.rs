//! Error types for tl-writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tl_core::SimulationRunId;
use tl_sim::SimError;

/// Errors raised while allocating run IDs or writing and reading run logs.
#[derive(Debug, Error)]
pub enum TickLogError {
    /// Scanning or creating the log root failed.
    #[error("cannot allocate run ID under {}: {source}", .path.display())]
    Allocation {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// `write_tick` before `open`, or after `close`.
    #[error("tick writer has not been opened")]
    NotOpen,

    /// The writer is open for a different run than the one being written.
    #[error("tick writer is open for {open}, refusing record for {requested}")]
    RunMismatch {
        open:      SimulationRunId,
        requested: SimulationRunId,
    },

    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Creating, writing or flushing a run file failed.
    #[error("write to {} failed: {source}", .path.display())]
    Write {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read from {} failed: {source}", .path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: not a snapshot: {source}", .path.display())]
    Corrupt {
        path:   PathBuf,
        line:   usize,
        #[source]
        source: serde_json::Error,
    },

    /// The engine could not produce a snapshot for the tick.
    #[error("snapshot unavailable: {0}")]
    Snapshot(#[from] SimError),

    #[error("tick writer lock poisoned")]
    WriterPoisoned,
}

/// Alias for `Result<T, TickLogError>`.
pub type TickLogResult<T> = Result<T, TickLogError>;
