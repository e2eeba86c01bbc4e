//! Test helpers for constructing viewer and repository fixtures.
//!
//! # Examples
//!
//! ```
//! use stargazer::github::models::test_support::{issue, repository};
//!
//! let repo = repository("R_1", "Hello-World", 1500);
//! assert!(repo.is_present());
//! assert_eq!(issue(3).title, "Issue 3");
//! ```

use super::{Issue, RepositoryId, RepositorySnapshot, StarReceipt, Viewer};

/// Constructs a viewer with the given display name and a fixed avatar URL.
#[must_use]
pub fn viewer(display_name: &str) -> Viewer {
    Viewer {
        display_name: display_name.to_owned(),
        avatar_url: "https://avatars.example/u/1".to_owned(),
    }
}

/// Constructs an issue whose fields are derived from `index`.
#[must_use]
pub fn issue(index: u64) -> Issue {
    Issue {
        id: format!("I_{index}"),
        title: format!("Issue {index}"),
        url: format!("https://github.com/octocat/Hello-World/issues/{index}"),
        published_at: None,
    }
}

/// Constructs an unstarred repository snapshot with stargazer data and no
/// issues.
///
/// # Examples
///
/// ```
/// use stargazer::github::models::test_support::repository;
///
/// let repo = repository("R_1", "Hello-World", 7);
/// assert_eq!(repo.star_count, Some(7));
/// assert!(!repo.viewer_has_starred);
/// ```
#[must_use]
pub fn repository(id: &str, name: &str, star_count: u64) -> RepositorySnapshot {
    RepositorySnapshot {
        id: RepositoryId::new(id),
        name: name.to_owned(),
        description: format!("{name} description"),
        viewer_has_starred: false,
        star_count: Some(star_count),
        recent_issues: None,
    }
}

/// Constructs a repository snapshot carrying `issue_count` issues.
#[must_use]
pub fn repository_with_issues(id: &str, name: &str, issue_count: u64) -> RepositorySnapshot {
    RepositorySnapshot {
        recent_issues: Some((1..=issue_count).map(issue).collect()),
        ..repository(id, name, 0)
    }
}

/// Constructs the receipt GitHub returns after starring `id`.
#[must_use]
pub fn star_receipt(id: &str, star_count: u64) -> StarReceipt {
    StarReceipt {
        repository_id: RepositoryId::new(id),
        star_count: Some(star_count),
    }
}
