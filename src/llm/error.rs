//! Completion error taxonomy.

use thiserror::Error;

/// Map a non-success HTTP status to an error variant.
///
/// 401 and 403 mean the credential was rejected; everything else is a
/// service-side failure (rate limit, unknown model, quota, 5xx).
pub(crate) fn status_error(status: u16, message: String) -> CompletionError {
    match status {
        401 | 403 => CompletionError::Auth(format!("credential rejected (status {status})")),
        _ => CompletionError::Api { status, message },
    }
}

/// Errors that can occur when requesting a completion.
///
/// Every failure of [`CompletionProvider::complete`] is one of these
/// variants; nothing propagates past that boundary as a panic or a raw
/// transport error.
///
/// [`CompletionProvider::complete`]: super::CompletionProvider::complete
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Missing or rejected credential.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Transport-level failure (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-success response from the remote service.
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Success status but no usable generated choice.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Request failed local validation before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
