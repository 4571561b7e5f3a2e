use kin_core::MobileId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("mobile {0} is not registered on this stage")]
    MobileNotFound(MobileId),
}

pub type StageResult<T> = Result<T, StageError>;
