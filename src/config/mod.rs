//! Configuration module
//!
//! Settings read by the `datamuse` binary. The library itself never
//! touches the config file.

pub mod config;
