//! Octocrab-backed implementation of [`GraphQlGateway`].

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::github::credentials::{ApiEndpoint, PersonalAccessToken};
use crate::github::error::GatewayError;
use crate::github::models::{
    ApiAddStarData, ApiRepositoryData, ApiViewerData, RepositoryId, RepositorySnapshot,
    SearchCriteria, StarReceipt, Viewer,
};
use crate::github::queries::{
    GraphQlRequest, NoVariables, Operation, RepoVariables, StarVariables,
};

use super::GraphQlGateway;
use super::client::build_octocrab_client;
use super::envelope::GraphQlResponse;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed GraphQL gateway.
pub struct OctocrabGraphQlGateway {
    client: Octocrab,
}

impl OctocrabGraphQlGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API endpoint.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidUrl` when the base URI cannot be parsed or
    /// `GatewayError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        endpoint: &ApiEndpoint,
    ) -> Result<Self, GatewayError> {
        let octocrab = build_octocrab_client(token, endpoint)?;
        Ok(Self::new(octocrab))
    }

    async fn execute<V, T>(
        &self,
        operation: Operation,
        variables: V,
    ) -> Result<GraphQlResponse<T>, GatewayError>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        let request = GraphQlRequest::new(operation, variables);
        tracing::debug!(operation = operation.name(), "sending GraphQL request");

        self.client
            .graphql::<GraphQlResponse<T>>(&request)
            .await
            .map_err(|error| {
                tracing::warn!(operation = operation.name(), "GraphQL request failed: {error}");
                map_octocrab_error(operation.name(), &error)
            })
    }
}

#[async_trait]
impl GraphQlGateway for OctocrabGraphQlGateway {
    async fn viewer(&self) -> Result<Viewer, GatewayError> {
        let response: GraphQlResponse<ApiViewerData> =
            self.execute(Operation::GetViewer, NoVariables {}).await?;
        let data = response.into_data(Operation::GetViewer)?;
        Ok(data.viewer.into())
    }

    async fn repository(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Option<RepositorySnapshot>, GatewayError> {
        let response: GraphQlResponse<ApiRepositoryData> = self
            .execute(Operation::GetRepo, RepoVariables::from(criteria))
            .await?;

        if response.is_not_found() {
            tracing::debug!(
                owner = criteria.organization_name.as_str(),
                name = criteria.repository_name.as_str(),
                "repository not found"
            );
            return Ok(None);
        }

        let data = response.into_data(Operation::GetRepo)?;
        Ok(data.repository.map(RepositorySnapshot::from))
    }

    async fn add_star(&self, repository_id: &RepositoryId) -> Result<StarReceipt, GatewayError> {
        let response: GraphQlResponse<ApiAddStarData> = self
            .execute(Operation::AddStar, StarVariables::from(repository_id))
            .await?;
        let data = response.into_data(Operation::AddStar)?;

        let starrable = data
            .add_star
            .and_then(|payload| payload.starrable)
            .ok_or_else(|| GatewayError::MissingData {
                operation: Operation::AddStar.name().to_owned(),
            })?;
        Ok(starrable.into())
    }
}
