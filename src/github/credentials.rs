//! Token and endpoint wrappers used to build the GraphQL client.

use url::Url;

use super::error::GatewayError;

/// Public GitHub API base used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, GatewayError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GatewayError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Base URL of the GitHub API that serves the `/graphql` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Parses an API base URL such as `https://api.github.com`.
    ///
    /// A trailing slash is removed so the GraphQL path joins cleanly.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidUrl` when the value is not an absolute
    /// `http` or `https` URL.
    pub fn parse(value: &str) -> Result<Self, GatewayError> {
        let trimmed = value.trim().trim_end_matches('/');
        let url =
            Url::parse(trimmed).map_err(|error| GatewayError::InvalidUrl(error.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(GatewayError::InvalidUrl(
                "URL must include a host".to_owned(),
            ));
        }

        Ok(Self(url))
    }

    /// Returns the base URL as a string without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ApiEndpoint, PersonalAccessToken};
    use crate::github::error::GatewayError;

    #[rstest]
    #[case::blank("")]
    #[case::whitespace("   \t")]
    fn blank_tokens_are_rejected(#[case] raw: &str) {
        assert_eq!(
            PersonalAccessToken::new(raw),
            Err(GatewayError::MissingToken)
        );
    }

    #[test]
    fn tokens_are_trimmed() {
        let token = PersonalAccessToken::new("  ghp_example \n").expect("token should be valid");
        assert_eq!(token.value(), "ghp_example");
    }

    #[test]
    fn token_debug_output_is_redacted() {
        let token = PersonalAccessToken::new("ghp_secret").expect("token should be valid");
        assert!(!format!("{token:?}").contains("ghp_secret"));
    }

    #[rstest]
    #[case::public("https://api.github.com", "https://api.github.com")]
    #[case::trailing_slash("https://api.github.com/", "https://api.github.com")]
    #[case::enterprise("https://ghe.example.com/api/", "https://ghe.example.com/api")]
    #[case::local("http://127.0.0.1:8080", "http://127.0.0.1:8080")]
    fn base_url_drops_trailing_slash(#[case] base: &str, #[case] expected: &str) {
        let endpoint = ApiEndpoint::parse(base).expect("endpoint should parse");
        assert_eq!(endpoint.as_str(), expected);
    }

    #[rstest]
    #[case::not_a_url("api.github.com")]
    #[case::ftp("ftp://example.com")]
    fn invalid_endpoints_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            ApiEndpoint::parse(raw),
            Err(GatewayError::InvalidUrl(_))
        ));
    }
}
