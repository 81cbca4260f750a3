use thiserror::Error;

/// Startup configuration failures. These abort the process before the
/// runtime loop starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Storage access failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no such key: {key}")]
    NotFound { key: String },

    #[error("storage error: {0}")]
    Internal(String),
}

/// Any failure between fetching the object and encoding the payload.
///
/// The variants exist for logging only; every one of them surfaces to the
/// caller as the same not-found response.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),
}
