//! Data models for the viewer, repository search, and star operations.
//!
//! Types prefixed with `Api` are internal deserialisation targets matching the
//! GraphQL selection sets; they convert into the public domain types below.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Maximum number of recent issues kept on a repository snapshot.
pub const MAX_RECENT_ISSUES: usize = 5;

/// Identity of the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    /// Display name; empty when the account has no name set.
    pub display_name: String,
    /// URL of the avatar image.
    pub avatar_url: String,
}

/// Organisation and repository name typed into the search form.
///
/// Both fields are always defined; an untouched form holds empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Organisation (repository owner) login.
    pub organization_name: String,
    /// Repository name.
    pub repository_name: String,
}

impl SearchCriteria {
    /// Creates criteria from the two form values.
    #[must_use]
    pub fn new(organization_name: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            repository_name: repository_name.into(),
        }
    }
}

/// GraphQL node identifier of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RepositoryId(String);

impl RepositoryId {
    /// Wraps a node identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns `true` for the placeholder identifier of an empty snapshot.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One of the most recent issues of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    /// Issue node identifier, unique within the list.
    pub id: String,
    /// Issue title.
    pub title: String,
    /// HTML URL of the issue.
    pub url: String,
    /// Publication timestamp if GitHub reported one.
    pub published_at: Option<DateTime<Utc>>,
}

/// Local copy of a repository as shown in the search panel.
///
/// The default value has an empty `id` and is never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySnapshot {
    /// Repository node identifier.
    pub id: RepositoryId,
    /// Repository name.
    pub name: String,
    /// Repository description; empty when unset.
    pub description: String,
    /// Whether the authenticated user has starred the repository.
    pub viewer_has_starred: bool,
    /// Stargazer total, absent when the response carried no stargazer data.
    pub star_count: Option<u64>,
    /// Up to [`MAX_RECENT_ISSUES`] issues in server order, absent when the
    /// response carried no issue edges.
    pub recent_issues: Option<Vec<Issue>>,
}

impl RepositorySnapshot {
    /// Returns `true` when the snapshot holds a repository worth rendering.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !self.id.is_empty()
    }

    /// Folds the result of a successful star mutation into the snapshot.
    ///
    /// Returns `false` and leaves the snapshot untouched when the receipt is
    /// for a different repository.
    pub fn apply_star(&mut self, receipt: &StarReceipt) -> bool {
        if receipt.repository_id != self.id {
            return false;
        }
        self.viewer_has_starred = true;
        if receipt.star_count.is_some() {
            self.star_count = receipt.star_count;
        }
        true
    }
}

/// Outcome of a successful `AddStar` mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarReceipt {
    /// Repository that was starred.
    pub repository_id: RepositoryId,
    /// Stargazer total reported after the mutation.
    pub star_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiViewerData {
    pub(super) viewer: ApiViewer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiViewer {
    pub(super) name: Option<String>,
    pub(super) avatar_url: String,
}

impl From<ApiViewer> for Viewer {
    fn from(api: ApiViewer) -> Self {
        Self {
            display_name: api.name.unwrap_or_default(),
            avatar_url: api.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepositoryData {
    pub(super) repository: Option<ApiRepository>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiRepository {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) viewer_has_starred: bool,
    pub(super) stargazers: Option<ApiStargazers>,
    pub(super) issues: Option<ApiIssueConnection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiStargazers {
    pub(super) total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssueConnection {
    pub(super) edges: Option<Vec<Option<ApiIssueEdge>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssueEdge {
    pub(super) node: Option<ApiIssue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiIssue {
    pub(super) id: String,
    pub(super) title: String,
    pub(super) url: String,
    pub(super) published_at: Option<DateTime<Utc>>,
}

impl From<ApiIssue> for Issue {
    fn from(api: ApiIssue) -> Self {
        Self {
            id: api.id,
            title: api.title,
            url: api.url,
            published_at: api.published_at,
        }
    }
}

impl From<ApiRepository> for RepositorySnapshot {
    fn from(api: ApiRepository) -> Self {
        let recent_issues = api
            .issues
            .and_then(|connection| connection.edges)
            .map(|edges| {
                edges
                    .into_iter()
                    .filter_map(|edge| edge.and_then(|present| present.node))
                    .map(Issue::from)
                    .take(MAX_RECENT_ISSUES)
                    .collect()
            });

        Self {
            id: RepositoryId::new(api.id),
            name: api.name,
            description: api.description.unwrap_or_default(),
            viewer_has_starred: api.viewer_has_starred,
            star_count: api.stargazers.map(|stargazers| stargazers.total_count),
            recent_issues,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiAddStarData {
    pub(super) add_star: Option<ApiAddStarPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiAddStarPayload {
    pub(super) starrable: Option<ApiStarrable>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiStarrable {
    pub(super) id: String,
    pub(super) stargazers: Option<ApiStargazers>,
}

impl From<ApiStarrable> for StarReceipt {
    fn from(api: ApiStarrable) -> Self {
        Self {
            repository_id: RepositoryId::new(api.id),
            star_count: api.stargazers.map(|stargazers| stargazers.total_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode_repository(value: serde_json::Value) -> RepositorySnapshot {
        let api: ApiRepository =
            serde_json::from_value(value).expect("repository payload should decode");
        RepositorySnapshot::from(api)
    }

    #[test]
    fn default_snapshot_is_not_present() {
        assert!(!RepositorySnapshot::default().is_present());
    }

    #[test]
    fn repository_conversion_keeps_issue_order_and_caps_the_list() {
        let edges: Vec<_> = (1..=7)
            .map(|index| {
                json!({ "node": {
                    "id": format!("I_{index}"),
                    "title": format!("Issue {index}"),
                    "url": format!("https://github.com/o/r/issues/{index}"),
                    "publishedAt": "2024-05-01T10:00:00Z"
                }})
            })
            .collect();

        let snapshot = decode_repository(json!({
            "id": "R_1",
            "name": "Hello-World",
            "description": null,
            "viewerHasStarred": false,
            "stargazers": { "totalCount": 1500 },
            "issues": { "edges": edges }
        }));

        let issues = snapshot.recent_issues.expect("issues should be present");
        let ids: Vec<_> = issues.iter().map(|issue| issue.id.as_str()).collect();
        assert_eq!(ids, vec!["I_1", "I_2", "I_3", "I_4", "I_5"]);
        assert_eq!(snapshot.description, "");
        assert_eq!(snapshot.star_count, Some(1500));
    }

    #[test]
    fn missing_connections_stay_absent() {
        let snapshot = decode_repository(json!({
            "id": "R_1",
            "name": "bare",
            "description": "no extras",
            "viewerHasStarred": true,
            "stargazers": null,
            "issues": null
        }));

        assert_eq!(snapshot.star_count, None);
        assert_eq!(snapshot.recent_issues, None);
    }

    #[test]
    fn null_edges_and_nodes_are_skipped() {
        let snapshot = decode_repository(json!({
            "id": "R_1",
            "name": "sparse",
            "description": "",
            "viewerHasStarred": false,
            "issues": { "edges": [
                null,
                { "node": null },
                { "node": { "id": "I_9", "title": "kept", "url": "u", "publishedAt": null } }
            ]}
        }));

        let issues = snapshot.recent_issues.expect("issues should be present");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.first().map(|issue| issue.title.as_str()), Some("kept"));
    }

    #[test]
    fn viewer_without_name_converts_to_empty_display_name() {
        let api: ApiViewer = serde_json::from_value(json!({
            "name": null,
            "avatarUrl": "https://avatars.example/u/1"
        }))
        .expect("viewer payload should decode");

        let viewer = Viewer::from(api);
        assert_eq!(viewer.display_name, "");
        assert_eq!(viewer.avatar_url, "https://avatars.example/u/1");
    }

    #[test]
    fn star_receipt_merges_into_matching_snapshot() {
        let mut snapshot = RepositorySnapshot {
            id: RepositoryId::new("R_1"),
            star_count: Some(10),
            ..RepositorySnapshot::default()
        };
        let receipt = StarReceipt {
            repository_id: RepositoryId::new("R_1"),
            star_count: Some(11),
        };

        assert!(snapshot.apply_star(&receipt));
        assert!(snapshot.viewer_has_starred);
        assert_eq!(snapshot.star_count, Some(11));
    }

    #[test]
    fn star_receipt_for_another_repository_is_ignored() {
        let mut snapshot = RepositorySnapshot {
            id: RepositoryId::new("R_1"),
            star_count: Some(10),
            ..RepositorySnapshot::default()
        };
        let receipt = StarReceipt {
            repository_id: RepositoryId::new("R_2"),
            star_count: Some(99),
        };

        assert!(!snapshot.apply_star(&receipt));
        assert!(!snapshot.viewer_has_starred);
        assert_eq!(snapshot.star_count, Some(10));
    }
}
