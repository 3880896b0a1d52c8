//! jbmc-cex-driver library exports for testing.
//!
//! Exposes the config, runner, output, and json_output modules for
//! integration tests. The binary entry point lives in main.rs.

pub mod config;
pub mod error;
pub mod json_output;
pub mod output;
pub mod runner;
