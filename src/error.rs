//! Error types shared across the core modules

/// Errors from the durable key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The backing file does not hold a JSON object of strings.
    #[error("storage file {path} is corrupt: {source}")]
    Serialization {
        path: String,
        source: serde_json::Error,
    },
    /// The store rejected the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A raw record could not be mapped onto the location pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    #[error("character index {index} exceeds location pool of {pool_size} points")]
    IndexOutOfPool { index: usize, pool_size: usize },
}

/// Errors from fetching and normalizing the character list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status.
    #[error("Marvel API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body is not the expected JSON shape.
    #[error("failed to parse response from {endpoint}: {source}")]
    Parse {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Credentials or base URL are unusable.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    /// No usable source was configured for this session.
    #[error("character source unavailable: {0}")]
    Unavailable(String),
}
