//! Error types for the data pipeline.

/// Errors that can occur while loading the bookmakers list.
///
/// All of them end up on the same error-display path; the display
/// message is what the user sees.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request itself failed (network error or timeout).
    #[error("Request failed")]
    RequestFailed,
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body is not valid JSON, or its elements are not
    /// bookmaker entries.
    #[error("Response is not a valid bookmakers document: {0}")]
    Parse(#[source] serde_json::Error),
    /// The decoded document is not an array, or the array is empty.
    #[error("{0}")]
    DataShape(String),
}
