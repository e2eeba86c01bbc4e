//! Generic `{ data, errors }` envelope returned by GraphQL endpoints.

use serde::Deserialize;

use crate::github::error::GatewayError;
use crate::github::queries::Operation;

const NOT_FOUND: &str = "NOT_FOUND";
const RATE_LIMITED: &str = "RATE_LIMITED";

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub(super) data: Option<T>,
    pub(super) errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct GraphQlError {
    pub(super) message: String,
    #[serde(rename = "type")]
    pub(super) kind: Option<String>,
}

impl<T> GraphQlResponse<T> {
    /// Returns `true` when every reported error is a `NOT_FOUND` error.
    pub(super) fn is_not_found(&self) -> bool {
        self.errors.as_deref().is_some_and(|errors| {
            !errors.is_empty()
                && errors
                    .iter()
                    .all(|error| error.kind.as_deref() == Some(NOT_FOUND))
        })
    }

    /// Converts the envelope into its data, surfacing any GraphQL errors.
    pub(super) fn into_data(self, operation: Operation) -> Result<T, GatewayError> {
        let errors = self.errors.unwrap_or_default();

        if let Some(limited) = errors
            .iter()
            .find(|error| error.kind.as_deref() == Some(RATE_LIMITED))
        {
            return Err(GatewayError::RateLimited {
                message: format!("{operation} failed: {}", limited.message),
            });
        }

        if !errors.is_empty() {
            return Err(GatewayError::GraphQl {
                messages: errors.into_iter().map(|error| error.message).collect(),
            });
        }

        self.data.ok_or_else(|| GatewayError::MissingData {
            operation: operation.name().to_owned(),
        })
    }
}
