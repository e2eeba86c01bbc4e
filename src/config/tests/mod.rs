//! Unit tests for configuration loading and precedence.
//!
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, endpoint, and initial criteria resolution
//! - `loading`: End-to-end loading from environment and CLI arguments

mod loading;
