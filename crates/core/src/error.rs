use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalkError>;

/// Errors produced while walking a directory tree
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}", describe_io(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

fn describe_io(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("failed to read {}", path.display()),
        None => "I/O error during traversal".to_string(),
    }
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        let source = match err.into_io_error() {
            Some(io_err) => io_err,
            // walkdir only reports a non-I/O error for symlink loops,
            // which cannot happen without follow_links
            None => io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
        };
        WalkError::Io { path, source }
    }
}
