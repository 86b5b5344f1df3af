use fg_core::FgError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] FgError),
}

pub type EngineResult<T> = Result<T, EngineError>;
