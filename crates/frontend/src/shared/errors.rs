use thiserror::Error;

/// HTTP response received with a non-success status.
///
/// The message is extracted from the response body; see
/// [`failure_message`](crate::shared::api_utils::failure_message) for the
/// resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub status: u16,
    pub message: String,
}

/// Failure of a call through the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (network, DNS, timeout)
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error(transparent)]
    Request(#[from] RequestError),
    /// A successful response did not match the shape the caller expected
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
