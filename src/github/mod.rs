//! GitHub GraphQL access for the viewer, repository search, and star flows.
//!
//! This module wraps Octocrab to post the three GraphQL documents the client
//! needs, decode their `{ data, errors }` envelopes, and map failures into
//! user-friendly variants so that callers can surface precise failures without
//! exposing Octocrab internals.

pub mod credentials;
pub mod error;
pub mod gateway;
pub mod models;
pub mod queries;

pub use credentials::{ApiEndpoint, DEFAULT_API_BASE, PersonalAccessToken};
pub use error::GatewayError;
pub use gateway::{GraphQlGateway, OctocrabGraphQlGateway};
pub use models::{
    Issue, MAX_RECENT_ISSUES, RepositoryId, RepositorySnapshot, SearchCriteria, StarReceipt,
    Viewer,
};
pub use queries::Operation;

#[cfg(test)]
pub use gateway::MockGraphQlGateway;
