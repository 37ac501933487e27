use pk_core::CoreError;
use pk_kernel::KernelError;
use pk_records::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreetError {
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("record error: {0}")]
    Records(#[from] RecordError),
}

pub type StreetResult<T> = Result<T, StreetError>;
