use anyhow::Result;
use cli::print_files;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use treewalk_workspace::{collect_files, walk, WalkError};

/// テスト用のディレクトリツリーを作成
fn create_tree(root: &Path, files: &[&str]) -> Result<()> {
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, file.as_bytes())?;
    }
    Ok(())
}

#[test]
fn test_every_path_is_an_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let files = [
        "Cargo.toml",
        "src/main.rs",
        "src/cli/mod.rs",
        "src/cli/args.rs",
        "tests/fixtures/a/b/c.json",
    ];
    create_tree(temp_dir.path(), &files)?;
    fs::create_dir_all(temp_dir.path().join("empty/inner"))?;

    let found = collect_files(temp_dir.path())?;
    let unique: HashSet<&PathBuf> = found.iter().collect();
    assert_eq!(unique.len(), found.len(), "no duplicates");

    for path in &found {
        assert!(path.is_file(), "{} should be a file", path.display());
        assert!(path.starts_with(temp_dir.path()));
    }

    let expected: HashSet<PathBuf> = files.iter().map(|f| temp_dir.path().join(f)).collect();
    assert_eq!(found.into_iter().collect::<HashSet<_>>(), expected);

    Ok(())
}

#[test]
fn test_parent_files_precede_child_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_tree(temp_dir.path(), &["top.txt", "a/mid.txt", "a/b/low.txt"])?;

    let found = collect_files(temp_dir.path())?;
    let position = |name: &str| found.iter().position(|p| p.ends_with(name)).unwrap();

    assert!(position("top.txt") < position("mid.txt"));
    assert!(position("mid.txt") < position("low.txt"));

    Ok(())
}

#[test]
fn test_walk_and_print_agree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_tree(temp_dir.path(), &["x.rs", "y/z.rs", "y/w/v.rs"])?;

    let walked = walk(temp_dir.path())?
        .map(|p| p.map(|p| p.display().to_string()))
        .collect::<treewalk_workspace::Result<Vec<String>>>()?;

    let mut out = Vec::new();
    let summary = print_files(temp_dir.path(), &mut out)?;
    let printed = String::from_utf8(out)?;

    assert_eq!(summary.files, walked.len());
    assert_eq!(printed.lines().collect::<Vec<_>>(), walked);

    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = collect_files(temp_dir.path().join("missing"));
    assert!(matches!(result, Err(WalkError::RootNotFound(_))));

    Ok(())
}
