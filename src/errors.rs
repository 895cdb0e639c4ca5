use thiserror::Error;

/// Errors surfaced while querying the storefront API.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The request did not complete (DNS, connection, timeout)
    #[error("Request error: {0}")]
    Request(String),

    /// The storefront answered with a status outside the 2xx range
    #[error("Server responded with status {status_code}: {error_message}")]
    Status {
        status_code: u16,
        error_message: String,
    },

    /// The response body did not decode into the expected shape
    #[error("Json parse error: {0}")]
    JsonParse(String),

    /// A dispatched batch task could not be joined
    #[error("Batch task failed: {0}")]
    BatchJoin(String),
}
