// Re-export the walker from core
pub use treewalk_core::{collect_files, walk, Result, Walk, WalkError};
