//! porter - File-guard hooks for Claude Code.
//!
//! Blocks edits to protected paths, formats and test-runs edited files
//! in the background, and records a summary line when a session ends.
//! Named after the hotel porter: checks who goes in, tidies up after.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod hooks;

pub use config::Config;
pub use error::{Error, Result};
