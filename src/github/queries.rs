//! GraphQL documents and request payloads for the three client operations.

use serde::Serialize;

use super::models::{RepositoryId, SearchCriteria};

/// Loads the authenticated user's name and avatar.
pub const GET_VIEWER: &str = r"query GetViewer {
  viewer {
    name
    avatarUrl
  }
}";

/// Loads a repository with its star data and last five issues.
pub const GET_REPO: &str = r"query GetRepo($orgName: String!, $repoName: String!) {
  repository(owner: $orgName, name: $repoName) {
    id
    name
    description
    viewerHasStarred
    stargazers {
      totalCount
    }
    issues(last: 5) {
      edges {
        node {
          id
          title
          url
          publishedAt
        }
      }
    }
  }
}";

/// Stars a repository for the authenticated user and selects the starred
/// node's id and stargazer total.
pub const ADD_STAR: &str = r"mutation AddStar($repoId: ID!) {
  addStar(input: { starrableId: $repoId }) {
    clientMutationId
    starrable {
      id
      stargazers {
        totalCount
      }
    }
  }
}";

/// Named GraphQL operations issued by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GetViewer` query.
    GetViewer,
    /// `GetRepo` query.
    GetRepo,
    /// `AddStar` mutation.
    AddStar,
}

impl Operation {
    /// Operation name as declared in the document.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetViewer => "GetViewer",
            Self::GetRepo => "GetRepo",
            Self::AddStar => "AddStar",
        }
    }

    /// GraphQL document for the operation.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::GetViewer => GET_VIEWER,
            Self::GetRepo => GET_REPO,
            Self::AddStar => ADD_STAR,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphQlRequest<V: Serialize> {
    query: &'static str,
    operation_name: &'static str,
    variables: V,
}

impl<V: Serialize> GraphQlRequest<V> {
    pub(crate) const fn new(operation: Operation, variables: V) -> Self {
        Self {
            query: operation.document(),
            operation_name: operation.name(),
            variables,
        }
    }
}

/// Variables for `GetViewer`.
#[derive(Debug, Serialize)]
pub(crate) struct NoVariables {}

/// Variables for `GetRepo`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepoVariables<'a> {
    org_name: &'a str,
    repo_name: &'a str,
}

impl<'a> From<&'a SearchCriteria> for RepoVariables<'a> {
    fn from(criteria: &'a SearchCriteria) -> Self {
        Self {
            org_name: criteria.organization_name.as_str(),
            repo_name: criteria.repository_name.as_str(),
        }
    }
}

/// Variables for `AddStar`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StarVariables<'a> {
    repo_id: &'a str,
}

impl<'a> From<&'a RepositoryId> for StarVariables<'a> {
    fn from(id: &'a RepositoryId) -> Self {
        Self {
            repo_id: id.as_str(),
        }
    }
}
