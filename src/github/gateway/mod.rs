//! Gateway for executing the client's GraphQL operations through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests against the GraphQL endpoint.

mod client;
mod envelope;
mod error_mapping;
mod graphql_client;

pub use graphql_client::OctocrabGraphQlGateway;

use async_trait::async_trait;

use crate::github::error::GatewayError;
use crate::github::models::{RepositoryId, RepositorySnapshot, SearchCriteria, StarReceipt, Viewer};

/// Gateway that executes the viewer query, the repository query, and the
/// star mutation.
///
/// Each call performs exactly one request; nothing is cached and a mutation
/// never refetches related queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphQlGateway: Send + Sync {
    /// Fetch the identity of the authenticated user (`GetViewer`).
    async fn viewer(&self) -> Result<Viewer, GatewayError>;

    /// Fetch a repository by owner and name (`GetRepo`).
    ///
    /// Returns `Ok(None)` when GitHub cannot resolve the repository.
    async fn repository(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Option<RepositorySnapshot>, GatewayError>;

    /// Star a repository for the authenticated user (`AddStar`).
    async fn add_star(&self, repository_id: &RepositoryId) -> Result<StarReceipt, GatewayError>;
}
