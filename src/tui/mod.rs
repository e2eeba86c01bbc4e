//! Terminal User Interface for the viewer panel and repository search.
//!
//! This module provides an interactive TUI for showing the authenticated
//! user, searching for a repository by owner and name, and starring it, using
//! the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::SearchApp`]
//! - **View**: Rendering logic in each component's `view()` function
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Requests run as async commands and report back through
//! [`messages::AppMsg`] completions. Each completion carries the ticket
//! issued when its request was triggered, so a response that a newer trigger
//! superseded never reaches the screen.
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Panel state machines and request lifecycle
//! - [`components`]: Stateless renderers
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway is handed over through module-level storage. Call
//! [`set_app_context`] before starting the program, and `SearchApp::init()`
//! will retrieve it.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::SearchApp;
pub use storage::{set_app_context, set_telemetry_sink};
