use thiserror::Error;

/// Failures surfaced to the user by the browsing UI. Every API call site maps
/// into one of these; none are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// User input that cannot be sent as-is (non-numeric capacity, empty name).
    #[error("invalid input: {0}")]
    Validation(String),
}
