//! Treewalk Core Library
//!
//! This crate provides the recursive directory walker.

pub mod error;
pub mod walker;

// Re-export main types
pub use error::{Result, WalkError};
pub use walker::{collect_files, walk, Walk};
