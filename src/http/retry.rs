//! Classification of HTTP failures into retryable and final ones.

use reqwest::StatusCode;

/// Maximum number of attempts for one request.
pub const MAX_RETRIES: usize = 3;

/// Delay between attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Failures that will not go away by asking again.
#[derive(Debug, thiserror::Error)]
pub enum NonRetryableError {
    /// HTTP 429 from the service's rate limiter.
    #[error("Rate limit exceeded: {0}. Try again later.")]
    RateLimitExceeded(String),
    /// HTTP 401.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
    /// HTTP 404, e.g. an unknown release name or feature version.
    #[error("Not found: {0}")]
    NotFound(String),
    /// HTTP 403.
    #[error("Access forbidden: {0}")]
    Forbidden(String),
    /// Any other 4xx, typically a filter value the service rejects.
    #[error("Request error: {0}")]
    ClientError(String),
}

/// Returns `Ok(())` for failures worth retrying (connection problems,
/// timeouts, 5xx) and the final error otherwise.
fn classify_error(error: &reqwest::Error) -> Result<(), NonRetryableError> {
    let Some(status) = error.status() else {
        return Ok(());
    };

    match status {
        StatusCode::UNAUTHORIZED => Err(NonRetryableError::AuthenticationFailed(
            "the API rejected the request credentials".to_string(),
        )),
        StatusCode::FORBIDDEN => Err(NonRetryableError::Forbidden(
            "access to this resource is forbidden".to_string(),
        )),
        StatusCode::TOO_MANY_REQUESTS => Err(NonRetryableError::RateLimitExceeded(
            "too many requests".to_string(),
        )),
        StatusCode::NOT_FOUND => Err(NonRetryableError::NotFound(
            "the API has no data for this request".to_string(),
        )),
        s if s.is_client_error() => Err(NonRetryableError::ClientError(format!(
            "HTTP {} error",
            s.as_u16()
        ))),
        _ => Ok(()),
    }
}

/// Converts an error from `error_for_status()` into an `anyhow::Error`,
/// swapping in a [`NonRetryableError`] when retrying is pointless.
pub(super) fn check_retryable(error: reqwest::Error) -> anyhow::Error {
    match classify_error(&error) {
        Ok(()) => anyhow::Error::from(error),
        Err(non_retryable) => anyhow::Error::from(non_retryable),
    }
}
