use cq_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("tick limit {limit} reached before the simulation drained")]
    TickLimit { limit: u64 },
}

pub type SimResult<T> = Result<T, SimError>;
