//! Command-line presentation layer
//!
//! The library returns typed results; this module decides how to surface them: command
//! output on stdout, orphan notices on stderr, and detailed diagnostics through `tracing`.

pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, run};
