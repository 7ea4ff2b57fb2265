use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Storage corruption: {0}")]
    Corruption(serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PersistError>;
