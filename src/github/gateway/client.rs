//! Octocrab client construction for the GraphQL gateway.

use http::Uri;
use octocrab::Octocrab;

use crate::github::credentials::{ApiEndpoint, PersonalAccessToken};
use crate::github::error::GatewayError;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client authenticated with `token` against `endpoint`.
///
/// Octocrab sends the token as a bearer credential on every request and
/// posts GraphQL documents to `{endpoint}/graphql`.
///
/// # Errors
///
/// Returns `GatewayError::InvalidUrl` when the base URI cannot be parsed or
/// `GatewayError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    endpoint: &ApiEndpoint,
) -> Result<Octocrab, GatewayError> {
    let base_uri: Uri = endpoint
        .as_str()
        .parse::<Uri>()
        .map_err(|error| GatewayError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| GatewayError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
