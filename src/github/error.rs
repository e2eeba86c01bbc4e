//! Error types exposed by the GitHub GraphQL layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The configured API URL could not be parsed.
    #[error("GitHub API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication HTTP error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// GitHub throttled the request.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimited {
        /// Error message from GitHub.
        message: String,
    },

    /// The GraphQL response carried an `errors` payload.
    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQl {
        /// Messages reported for each GraphQL error, in response order.
        messages: Vec<String>,
    },

    /// The GraphQL response had neither data nor errors.
    #[error("GraphQL response for {operation} contained no data")]
    MissingData {
        /// Name of the operation that returned the empty response.
        operation: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal program failed to start or exited abnormally.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail from the terminal runtime.
        message: String,
    },
}
