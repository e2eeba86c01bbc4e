//! Translation of Octocrab transport failures into [`GatewayError`].
//!
//! GraphQL-level failures arrive inside a `200 OK` envelope and are handled by
//! the envelope module. This module only deals with requests that never
//! produced an envelope: HTTP error statuses and transport failures.

use http::StatusCode;

use crate::github::error::GatewayError;

/// Broad category of an HTTP error status returned by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    Throttled,
    Unauthorised,
    Other,
}

/// Classifies a GitHub error response.
///
/// A 403 counts as throttling only when GitHub says so in the message or the
/// documentation link; a bare 403 means the token lacks access.
fn classify(source: &octocrab::GitHubError) -> StatusClass {
    let mentions_rate_limit = || {
        source.message.to_lowercase().contains("rate limit")
            || source
                .documentation_url
                .as_deref()
                .is_some_and(|url| url.contains("rate-limit"))
    };

    match source.status_code {
        StatusCode::TOO_MANY_REQUESTS => StatusClass::Throttled,
        StatusCode::FORBIDDEN if mentions_rate_limit() => StatusClass::Throttled,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StatusClass::Unauthorised,
        _ => StatusClass::Other,
    }
}

/// Maps an Octocrab error raised while running `operation`.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> GatewayError {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            let message = format!(
                "{operation} returned {status}: {detail}",
                status = source.status_code,
                detail = source.message
            );
            match classify(source) {
                StatusClass::Throttled => GatewayError::RateLimited { message },
                StatusClass::Unauthorised => GatewayError::Authentication { message },
                StatusClass::Other => GatewayError::Api { message },
            }
        }
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => GatewayError::Network {
            message: format!("{operation} could not reach GitHub: {error}"),
        },
        _ => GatewayError::Api {
            message: format!("{operation} failed: {error}"),
        },
    }
}
