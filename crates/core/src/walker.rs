use crate::error::{Result, WalkError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Lazy, top-down walk over every file below a root directory.
///
/// Each call to `next` reads at most one directory listing. The first
/// error is yielded once and ends the walk.
pub struct Walk {
    inner: walkdir::IntoIter,
    done: bool,
}

/// Start walking `root`.
///
/// The root is checked up front: a missing root or one that is not a
/// directory is an error before any entry is read.
pub fn walk<P: AsRef<Path>>(root: P) -> Result<Walk> {
    let root = root.as_ref();
    check_root(root)?;
    debug!("Walking {}", root.display());

    let inner = WalkDir::new(root)
        .follow_links(false)
        // Files of a directory come before its subdirectories; the sort
        // is stable so siblings keep the listing order.
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
        .into_iter();

    Ok(Walk { inner, done: false })
}

/// Walk `root` eagerly and return every file path, or the first error.
pub fn collect_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    walk(root)?.collect()
}

fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(WalkError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(WalkError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(WalkError::Io {
            path: Some(root.to_path_buf()),
            source: e,
        }),
    }
}

/// Everything that is not a directory is a file. Links are not followed,
/// but a link that resolves to a directory still counts as one.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

impl Iterator for Walk {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if is_file_entry(&entry) {
                        return Some(Ok(entry.into_path()));
                    }
                    if entry.file_type().is_dir() {
                        debug!("Entering {}", entry.path().display());
                    }
                }
                Err(e) => {
                    self.done = true;
                    warn!("Walk stopped: {}", e);
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Walk {}
