use thiserror::Error;

#[derive(Debug, Error)]
pub enum MrzError {
    #[error("invalid MRZ character: {0:?}")]
    InvalidCharacter(char),
    #[error("format error: {0}")]
    FormatError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
