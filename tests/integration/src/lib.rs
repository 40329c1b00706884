//! Integration test utilities for the news feed gateway
//!
//! Spawns the REST API on an ephemeral port and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
