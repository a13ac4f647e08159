use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::file_system::FileSystem;

/// In-memory file tree used by tests.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
  files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
  dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
  /// Seeds the tree with `(path, content)` pairs, creating parent
  /// directories along the way.
  pub fn new(seed: &[(&str, &str)]) -> Self {
    let fs = Self::default();
    for (path, content) in seed {
      let path = Path::new(path);
      if let Some(parent) = path.parent() {
        fs.create_dir_all(parent).unwrap();
      }
      fs.write(path, content.as_bytes()).unwrap();
    }
    fs
  }
}

fn not_found(path: &Path) -> io::Error {
  io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display()))
}

impl FileSystem for MemoryFileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    self.files.lock().unwrap().get(path).cloned().ok_or_else(|| not_found(path))
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_vec());
    Ok(())
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    let mut dirs = self.dirs.lock().unwrap();
    for ancestor in path.ancestors() {
      dirs.insert(ancestor.to_path_buf());
    }
    Ok(())
  }

  fn exists(&self, path: &Path) -> bool {
    self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
  }

  fn remove_file(&self, path: &Path) -> io::Result<()> {
    self.files.lock().unwrap().remove(path).map(|_| ()).ok_or_else(|| not_found(path))
  }

  fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(self.files.lock().unwrap().keys().filter(|path| path.starts_with(dir)).cloned().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seeded_files_are_readable() {
    let fs = MemoryFileSystem::new(&[("app/static/js/index.mjs", "export {}")]);
    assert_eq!(fs.read_to_string(Path::new("app/static/js/index.mjs")).unwrap(), "export {}");
    assert!(fs.exists(Path::new("app/static/js")));
    assert!(!fs.exists(Path::new("app/static/css")));
  }

  #[test]
  fn walk_is_prefix_scoped() {
    let fs = MemoryFileSystem::new(&[
      ("a/one.mjs", ""),
      ("a/two.mjs", ""),
      ("b/three.mjs", ""),
    ]);
    let files = fs.walk(Path::new("a")).unwrap();
    assert_eq!(files, vec![PathBuf::from("a/one.mjs"), PathBuf::from("a/two.mjs")]);
  }
}
