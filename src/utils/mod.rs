//! Utility functions and helpers
//!
//! Log setup and application paths used by the binary.

pub mod app_paths;
pub mod logging;
