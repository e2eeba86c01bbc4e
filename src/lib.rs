//! Stargazer library crate: a GitHub viewer, repository search, and star
//! client.
//!
//! The library wraps Octocrab to post the `GetViewer`, `GetRepo`, and
//! `AddStar` GraphQL operations, reconciles their completions with local
//! panel state, and renders both panels in a bubbletea-rs terminal UI.

pub mod config;
pub mod github;
pub mod telemetry;
pub mod tui;

pub use config::StargazerConfig;
pub use github::{
    ApiEndpoint, GatewayError, GraphQlGateway, OctocrabGraphQlGateway, PersonalAccessToken,
    RepositoryId, RepositorySnapshot, SearchCriteria, StarReceipt, Viewer,
};
