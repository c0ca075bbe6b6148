use thiserror::Error;
use tl_core::SimulationRunId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("no active run {0}")]
    UnknownRun(SimulationRunId),

    #[error("run {0} is already active")]
    DuplicateRun(SimulationRunId),

    #[error("model error: {0}")]
    Model(String),
}

pub type SimResult<T> = Result<T, SimError>;
