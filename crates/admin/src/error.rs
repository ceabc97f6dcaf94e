use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdminError>;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Storage error: {0}")]
    StorageError(#[from] storage::error::StorageError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
