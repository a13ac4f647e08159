use std::io;
use std::path::{Path, PathBuf};

use crate::file_system::FileSystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    std::fs::write(path, contents)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn remove_file(&self, path: &Path) -> io::Result<()> {
    std::fs::remove_file(path)
  }

  fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
      return Ok(vec![]);
    }
    let mut files = vec![];
    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
      let entry = entry.map_err(io::Error::from)?;
      if entry.file_type().is_file() {
        files.push(entry.into_path());
      }
    }
    Ok(files)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn walk_lists_nested_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("plugins")).unwrap();
    std::fs::write(root.join("plugins/citation.js"), b"").unwrap();
    std::fs::write(root.join("index.mjs"), b"").unwrap();

    let fs = OsFileSystem;
    let files = fs.walk(root).unwrap();
    assert_eq!(
      files,
      vec![root.join("index.mjs"), root.join("plugins/citation.js")]
    );
  }

  #[test]
  fn walk_missing_dir_is_empty() {
    let fs = OsFileSystem;
    assert!(fs.walk(Path::new("/definitely/not/here")).unwrap().is_empty());
  }
}
