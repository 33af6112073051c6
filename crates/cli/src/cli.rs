use anyhow::{Context, Result};
use clap::Parser;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use treewalk_core::walk;

const DEFAULT_ROOT: &str = "./src";

#[derive(Parser)]
#[command(name = "treewalk")]
#[command(about = "Recursively list every file below a directory")]
#[command(version)]
pub struct Cli {
    /// Directory to walk (default: ./src)
    #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let summary = print_files(&self.root, &mut out)?;
        writeln!(out, "{}", summary)?;
        out.flush()?;

        info!("Walked {}: {}", self.root.display(), summary);
        Ok(())
    }
}

/// Result of a completed listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub files: usize,
}

impl fmt::Display for WalkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.files == 1 {
            write!(f, "1 file")
        } else {
            write!(f, "{} files", self.files)
        }
    }
}

/// Write every file below `root` to `out`, one path per line.
///
/// Stops at the first traversal error; lines written before it stay written.
pub fn print_files<W: Write>(root: &Path, out: &mut W) -> Result<WalkSummary> {
    let files = walk(root).with_context(|| format!("Cannot walk {}", root.display()))?;

    let mut summary = WalkSummary { files: 0 };
    for file in files {
        let file = file.with_context(|| format!("Walk of {} failed", root.display()))?;
        writeln!(out, "{}", file.display())?;
        summary.files += 1;
    }

    Ok(summary)
}
