//! CLI operation mode handlers.
//!
//! - [`search_tui`]: Interactive TUI for the viewer panel and repository
//!   search

pub mod search_tui;
