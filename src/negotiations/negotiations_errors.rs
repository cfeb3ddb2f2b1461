use thiserror::Error;

/// Errors raised by the external trade-history source.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The source could not be reached.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The source rejected the request.
    #[error("source rejected the request: {0}")]
    Rejected(String),
}

/// Storage-agnostic errors raised by the negotiation store.
///
/// The store converts engine-specific errors into this format.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read negotiations or job metadata.
    #[error("failed to read from the store: {0}")]
    Read(String),

    /// Failed to write batches or job metadata.
    #[error("failed to write to the store: {0}")]
    Write(String),
}
