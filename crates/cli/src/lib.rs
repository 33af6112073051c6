//! CLI and IO Layer
//!
//! This crate provides the command-line interface that prints a directory walk.

pub mod cli;

// Re-exports
pub use cli::{print_files, Cli, WalkSummary};
