use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SealError {
    #[error("{0}")]
    KeyFormat(String),

    #[error("{0}")]
    SignatureFormat(String),
}
