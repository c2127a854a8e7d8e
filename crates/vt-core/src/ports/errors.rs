use thiserror::Error;

/// Failure of a backend round-trip. All variants are retryable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}
