use thiserror::Error;

/// Result type for tolc-header operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for class-file serialization
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Utf8 constant too long: {len} bytes encoded, limit is 65535")]
    Utf8TooLong { len: usize },
}
