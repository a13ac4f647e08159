use std::io;
use std::path::{Path, PathBuf};

/// The file operations the pipeline needs. Kept small so tests can run
/// against an in-memory implementation.
pub trait FileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let bytes = self.read(path)?;
    String::from_utf8(bytes)
      .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))
  }

  /// Parent directories must already exist.
  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn exists(&self, path: &Path) -> bool;

  fn remove_file(&self, path: &Path) -> io::Result<()>;

  /// Every regular file below `dir`, in a stable sorted order. A missing
  /// directory yields an empty list rather than an error.
  fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}
