//! Error types for the presentation pipeline
//!
//! Every failure that can happen while resolving an account, fetching a
//! transcript or generating a presentation is expressed as a [`SlidesError`].
//! Tools render these errors as in-band text; they never become JSON-RPC
//! faults.

use thiserror::Error;

/// Presentation pipeline error types.
#[derive(Debug, Error)]
pub enum SlidesError {
    /// Missing or malformed tool arguments, or an invalid URL.
    #[error("{0}")]
    InvalidInput(String),

    /// The account service answered without the required identity fields.
    #[error("Invalid access data received. Please check your access ID.")]
    InvalidAccount,

    /// The account's plan is not entitled to generate presentations.
    #[error("Your plan ({plan}) does not allow generating PowerPoints. Upgrade here: {pricing_url}")]
    PlanNotAllowed {
        /// Plan as reported by the account service.
        plan: String,
        /// Where the user can upgrade.
        pricing_url: String,
    },

    /// Transcript retrieval failed for any reason.
    #[error("Error fetching YouTube transcript: {0}")]
    Transcript(String),

    /// The generation service returned a falsy `success` or a malformed body.
    #[error("{0}")]
    Generation(String),

    /// An outbound call failed at the network level or returned non-2xx.
    #[error("{service} service unavailable: {message}")]
    UpstreamUnavailable {
        /// Service name.
        service: &'static str,
        /// Upstream error message.
        message: String,
    },

    /// An outbound call did not complete within the configured timeout.
    #[error("{service} service timed out after {timeout_secs}s")]
    Timeout {
        /// Service name.
        service: &'static str,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
}

impl SlidesError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SlidesError::InvalidInput(message.into())
    }

    /// Classify a transport-level reqwest failure for `service`.
    pub(crate) fn from_transport(
        service: &'static str,
        timeout_secs: u64,
        err: reqwest::Error,
    ) -> Self {
        if err.is_timeout() {
            SlidesError::Timeout {
                service,
                timeout_secs,
            }
        } else {
            SlidesError::UpstreamUnavailable {
                service,
                message: err.to_string(),
            }
        }
    }
}

/// Result type for presentation pipeline operations.
pub type SlidesResult<T> = Result<T, SlidesError>;
